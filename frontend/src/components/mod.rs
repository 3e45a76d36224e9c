pub mod drawer;
pub mod header;
pub mod notice_banner;
pub mod pagination_bar;
pub mod positions;
pub mod row_action_menu;
pub mod side_menu;
pub mod status_tag;
pub mod teachers;
