//! View model for the position management screen: the full position list
//! plus its creation drawer. Unlike the teacher screen there is no paging.

use crate::error::ApiError;
use crate::notice::{NoticeKind, NoticeSlot};
use crate::request::{LoadPhase, RequestTicket};
use crate::validation::{validate, FieldSpec, FormErrors, Rule};
use crate::{CreatePositionRequest, Position};

pub const CREATE_SUCCESS_MESSAGE: &str = "Tạo vị trí công tác thành công";
pub const CREATE_FALLBACK_MESSAGE: &str = "Lỗi khi tạo vị trí công tác";
pub const LOAD_FAILED_MESSAGE: &str = "Lỗi khi tải danh sách vị trí công tác";

/// Value of the active/inactive segmented control
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PositionStatus {
    #[default]
    Active,
    Inactive,
}

impl PositionStatus {
    pub const ALL: [PositionStatus; 2] = [PositionStatus::Active, PositionStatus::Inactive];

    pub fn value(&self) -> &'static str {
        match self {
            PositionStatus::Active => "active",
            PositionStatus::Inactive => "inactive",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PositionStatus::Active => "Hoạt động",
            PositionStatus::Inactive => "Ngừng",
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, PositionStatus::Active)
    }
}

/// Status tag shown in the table for a position's `isActive` flag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionStatusTag {
    pub label: &'static str,
    pub color: &'static str,
}

impl PositionStatusTag {
    pub fn for_flag(is_active: bool) -> Self {
        if is_active {
            Self { label: "Hoạt động", color: "green" }
        } else {
            Self { label: "Ngừng", color: "default" }
        }
    }
}

/// 1-based row number for the STT column
pub fn sequence_number(index: usize) -> usize {
    index + 1
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PositionField {
    Code,
    Name,
    Description,
}

const POSITION_FORM_SPECS: &[FieldSpec<PositionField>] = &[
    FieldSpec { field: PositionField::Code, rules: &[Rule::Required("Vui lòng nhập mã vị trí")] },
    FieldSpec { field: PositionField::Name, rules: &[Rule::Required("Vui lòng nhập tên vị trí")] },
    FieldSpec { field: PositionField::Description, rules: &[Rule::Required("Vui lòng nhập mô tả")] },
];

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PositionForm {
    pub code: String,
    pub name: String,
    pub description: String,
    pub status: PositionStatus,
}

impl PositionForm {
    pub fn value(&self, field: PositionField) -> &str {
        match field {
            PositionField::Code => &self.code,
            PositionField::Name => &self.name,
            PositionField::Description => &self.description,
        }
    }

    pub fn set(&mut self, field: PositionField, value: String) {
        match field {
            PositionField::Code => self.code = value,
            PositionField::Name => self.name = value,
            PositionField::Description => self.description = value,
        }
    }

    pub fn validate(&self) -> FormErrors<PositionField> {
        validate(POSITION_FORM_SPECS, |field| self.value(field))
    }

    pub fn to_request(&self) -> Result<CreatePositionRequest, FormErrors<PositionField>> {
        let errors = self.validate();
        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(CreatePositionRequest {
            code: self.code.clone(),
            name: self.name.clone(),
            des: self.description.clone(),
            is_active: self.status.is_active(),
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PositionAction {
    LoadRequested { ticket: RequestTicket },
    Loaded { ticket: RequestTicket, positions: Vec<Position> },
    LoadFailed { ticket: RequestTicket },
    OpenDrawer,
    CloseDrawer,
    FieldChanged(PositionField, String),
    StatusChanged(PositionStatus),
    SubmitRejected(FormErrors<PositionField>),
    SubmitStarted,
    CreateSucceeded,
    CreateFailed(ApiError),
    NoticeDismissed(u32),
}

impl PositionAction {
    /// Outcome of `POST /teacher-positions`; any success counts
    pub fn create_outcome<T>(result: Result<T, ApiError>) -> Self {
        match result {
            Ok(_) => PositionAction::CreateSucceeded,
            Err(error) => PositionAction::CreateFailed(error),
        }
    }
}

/// State of one mounted position screen
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PositionManagement {
    pub positions: Vec<Position>,
    pub phase: LoadPhase,
    latest_request: Option<RequestTicket>,
    pub drawer_open: bool,
    pub form: PositionForm,
    pub errors: FormErrors<PositionField>,
    pub submitting: bool,
    pub notices: NoticeSlot,
}

impl PositionManagement {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_loading(&self) -> bool {
        self.phase == LoadPhase::Loading
    }

    pub fn apply(&mut self, action: PositionAction) {
        match action {
            PositionAction::LoadRequested { ticket } => {
                self.latest_request = Some(ticket);
                self.phase = LoadPhase::Loading;
            }
            PositionAction::Loaded { ticket, positions } => {
                if self.latest_request != Some(ticket) {
                    return;
                }
                self.latest_request = None;
                self.positions = positions;
                self.phase = LoadPhase::Ready;
            }
            PositionAction::LoadFailed { ticket } => {
                if self.latest_request != Some(ticket) {
                    return;
                }
                self.latest_request = None;
                self.phase = LoadPhase::Error;
                self.notices.show(NoticeKind::Error, LOAD_FAILED_MESSAGE);
            }
            PositionAction::OpenDrawer => {
                self.drawer_open = true;
            }
            PositionAction::CloseDrawer => {
                self.drawer_open = false;
                self.reset_form();
            }
            PositionAction::FieldChanged(field, value) => {
                self.form.set(field, value);
                self.errors.clear(field);
            }
            PositionAction::StatusChanged(status) => {
                self.form.status = status;
            }
            PositionAction::SubmitRejected(errors) => {
                self.errors = errors;
            }
            PositionAction::SubmitStarted => {
                self.errors = FormErrors::default();
                self.submitting = true;
            }
            PositionAction::CreateSucceeded => {
                self.submitting = false;
                self.drawer_open = false;
                self.reset_form();
                self.notices.show(NoticeKind::Success, CREATE_SUCCESS_MESSAGE);
            }
            PositionAction::CreateFailed(error) => {
                self.submitting = false;
                self.notices.show(NoticeKind::Error, error.user_message(CREATE_FALLBACK_MESSAGE));
            }
            PositionAction::NoticeDismissed(id) => {
                self.notices.dismiss(id);
            }
        }
    }

    fn reset_form(&mut self) {
        self.form = PositionForm::default();
        self.errors = FormErrors::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::RequestTracker;

    fn position(code: &str, is_active: bool) -> Position {
        Position {
            id: format!("id-{}", code),
            code: code.to_string(),
            name: format!("Vị trí {}", code),
            description: String::new(),
            is_active,
        }
    }

    fn filled_form(status: PositionStatus) -> PositionForm {
        PositionForm {
            code: "TTCM".to_string(),
            name: "Tổ trưởng chuyên môn".to_string(),
            description: "Phụ trách tổ".to_string(),
            status,
        }
    }

    #[test]
    fn test_status_tag_for_both_flags() {
        assert_eq!(PositionStatusTag::for_flag(true), PositionStatusTag { label: "Hoạt động", color: "green" });
        assert_eq!(PositionStatusTag::for_flag(false), PositionStatusTag { label: "Ngừng", color: "default" });
    }

    #[test]
    fn test_segmented_value_maps_to_flag() {
        let request = filled_form(PositionStatus::Inactive).to_request().unwrap();
        assert!(!request.is_active);
        let request = filled_form(PositionStatus::Active).to_request().unwrap();
        assert!(request.is_active);
        assert_eq!(request.des, "Phụ trách tổ");
    }

    #[test]
    fn test_form_defaults_to_active() {
        assert_eq!(PositionForm::default().status, PositionStatus::Active);
        assert_eq!(PositionStatus::Active.value(), "active");
        assert_eq!(PositionStatus::Inactive.value(), "inactive");
    }

    #[test]
    fn test_required_fields() {
        let errors = PositionForm::default().to_request().unwrap_err();
        assert_eq!(errors.get(PositionField::Code), Some("Vui lòng nhập mã vị trí"));
        assert_eq!(errors.get(PositionField::Name), Some("Vui lòng nhập tên vị trí"));
        assert_eq!(errors.get(PositionField::Description), Some("Vui lòng nhập mô tả"));
    }

    #[test]
    fn test_sequence_number_follows_array_position() {
        assert_eq!(sequence_number(0), 1);
        assert_eq!(sequence_number(9), 10);
    }

    #[test]
    fn test_list_is_replaced_wholesale() {
        let mut tracker = RequestTracker::new();
        let mut screen = PositionManagement::new();

        let ticket = tracker.issue();
        screen.apply(PositionAction::LoadRequested { ticket });
        screen.apply(PositionAction::Loaded { ticket, positions: vec![position("A", true)] });

        let ticket = tracker.issue();
        screen.apply(PositionAction::LoadRequested { ticket });
        assert!(screen.is_loading());
        screen.apply(PositionAction::Loaded {
            ticket,
            positions: vec![position("B", false), position("A", true)],
        });

        let codes: Vec<&str> = screen.positions.iter().map(|p| p.code.as_str()).collect();
        assert_eq!(codes, vec!["B", "A"]);
        assert_eq!(screen.phase, LoadPhase::Ready);
    }

    #[test]
    fn test_stale_load_is_ignored() {
        let mut tracker = RequestTracker::new();
        let mut screen = PositionManagement::new();

        let old = tracker.issue();
        screen.apply(PositionAction::LoadRequested { ticket: old });
        let new = tracker.issue();
        screen.apply(PositionAction::LoadRequested { ticket: new });

        screen.apply(PositionAction::Loaded { ticket: old, positions: vec![position("OLD", true)] });
        assert!(screen.positions.is_empty());
        assert!(screen.is_loading());

        screen.apply(PositionAction::Loaded { ticket: new, positions: vec![position("NEW", true)] });
        assert_eq!(screen.positions[0].code, "NEW");
    }

    #[test]
    fn test_load_failure_shows_notice_and_keeps_rows() {
        let mut tracker = RequestTracker::new();
        let mut screen = PositionManagement::new();
        let ticket = tracker.issue();
        screen.apply(PositionAction::LoadRequested { ticket });
        screen.apply(PositionAction::Loaded { ticket, positions: vec![position("A", true)] });

        let ticket = tracker.issue();
        screen.apply(PositionAction::LoadRequested { ticket });
        screen.apply(PositionAction::LoadFailed { ticket });

        assert_eq!(screen.positions.len(), 1);
        assert_eq!(screen.phase, LoadPhase::Error);
        assert_eq!(screen.notices.current().unwrap().text, LOAD_FAILED_MESSAGE);
    }

    #[test]
    fn test_create_success_resets_form() {
        let mut screen = PositionManagement::new();
        screen.apply(PositionAction::OpenDrawer);
        screen.form = filled_form(PositionStatus::Inactive);
        screen.apply(PositionAction::SubmitStarted);
        screen.apply(PositionAction::CreateSucceeded);

        assert!(!screen.drawer_open);
        assert_eq!(screen.form, PositionForm::default());
        let notice = screen.notices.current().unwrap();
        assert_eq!(notice.kind, NoticeKind::Success);
        assert_eq!(notice.text, CREATE_SUCCESS_MESSAGE);
    }

    #[test]
    fn test_empty_created_body_counts_as_success() {
        let mut screen = PositionManagement::default();
        screen.apply(PositionAction::OpenDrawer);
        screen.form = filled_form(PositionStatus::Active);
        screen.apply(PositionAction::SubmitStarted);

        let echoed: Option<Position> = crate::decode_created("");
        screen.apply(PositionAction::create_outcome(Ok::<_, ApiError>(echoed)));

        assert!(!screen.drawer_open);
        assert!(!screen.submitting);
        assert_eq!(screen.form, PositionForm::default());
        assert_eq!(screen.notices.current().unwrap().kind, NoticeKind::Success);
    }

    #[test]
    fn test_duplicate_code_message_is_shown_verbatim() {
        let mut screen = PositionManagement::new();
        screen.apply(PositionAction::OpenDrawer);
        screen.form = filled_form(PositionStatus::Active);
        screen.apply(PositionAction::SubmitStarted);
        screen.apply(PositionAction::CreateFailed(ApiError::from_error_body(
            409,
            r#"{"error":"Mã vị trí đã tồn tại"}"#,
        )));

        assert!(!screen.submitting);
        assert!(screen.drawer_open);
        assert_eq!(screen.notices.current().unwrap().text, "Mã vị trí đã tồn tại");

        screen.apply(PositionAction::CreateFailed(ApiError::from_error_body(500, "{}")));
        assert_eq!(screen.notices.current().unwrap().text, CREATE_FALLBACK_MESSAGE);
    }

    #[test]
    fn test_status_change_and_close() {
        let mut screen = PositionManagement::new();
        screen.apply(PositionAction::OpenDrawer);
        screen.apply(PositionAction::StatusChanged(PositionStatus::Inactive));
        screen.apply(PositionAction::FieldChanged(PositionField::Code, "GVBM".to_string()));
        assert_eq!(screen.form.status, PositionStatus::Inactive);

        screen.apply(PositionAction::CloseDrawer);
        assert_eq!(screen.form, PositionForm::default());
    }
}
