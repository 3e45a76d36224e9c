pub mod position_form;
pub mod position_management_view;
pub mod position_table;

pub use position_management_view::PositionManagementView;
