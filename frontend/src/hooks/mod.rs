pub mod use_notice_timeout;
pub mod use_position_management;
pub mod use_teacher_directory;
