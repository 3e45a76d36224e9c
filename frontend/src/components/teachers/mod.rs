pub mod degree_table;
pub mod teacher_directory_view;
pub mod teacher_form;
pub mod teacher_table;

pub use teacher_directory_view::TeacherDirectoryView;
