//! # Teacher Directory Screen
//!
//! View model for the paginated teacher list and its creation drawer.
//!
//! The state is owned by one mounted screen. The frontend feeds it
//! `TeacherAction`s (from user input and from finished requests) and renders
//! whatever `TeacherDirectory` holds afterwards. Nothing here performs I/O.

use crate::dates::normalize_input_date;
use crate::error::ApiError;
use crate::notice::{NoticeKind, NoticeSlot};
use crate::pagination::{ListQuery, PageState};
use crate::request::{LoadPhase, RequestTicket};
use crate::validation::{validate, FieldSpec, FormErrors, Rule};
use crate::{CreateTeacherRequest, Degree, DegreeDraft, Position, Teacher, TeacherPage};

pub const CREATE_SUCCESS_MESSAGE: &str = "Tạo giáo viên thành công";
pub const CREATE_FALLBACK_MESSAGE: &str = "Lỗi khi tạo giáo viên";
pub const LOAD_FAILED_MESSAGE: &str = "Lỗi khi tải danh sách giáo viên";

/// The only status label the backend uses for an active teacher
pub const ACTIVE_STATUS_LABEL: &str = "Đang hoạt động";

/// The department column has no backing data
pub const DEPARTMENT_PLACEHOLDER: &str = "N/A";

/// Activity status shown in the status column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TeacherStatus {
    Active,
    Inactive,
}

impl TeacherStatus {
    /// Active only on an exact match; anything else, including "", is inactive
    pub fn from_label(label: &str) -> Self {
        if label == ACTIVE_STATUS_LABEL {
            TeacherStatus::Active
        } else {
            TeacherStatus::Inactive
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TeacherStatus::Active => "Đang công tác",
            TeacherStatus::Inactive => "Ngừng công tác",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            TeacherStatus::Active => "green",
            TeacherStatus::Inactive => "red",
        }
    }
}

/// The degree shown as "highest": the last one in the list, whatever its year.
pub fn highest_degree(teacher: &Teacher) -> Option<&Degree> {
    teacher.degrees.last()
}

/// Text fields of the creation form
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TeacherField {
    Name,
    Dob,
    Phone,
    Email,
    Identity,
    Address,
    StartDate,
    EndDate,
}

const TEACHER_FORM_SPECS: &[FieldSpec<TeacherField>] = &[
    FieldSpec { field: TeacherField::Name, rules: &[Rule::Required("Vui lòng nhập họ và tên")] },
    FieldSpec { field: TeacherField::Dob, rules: &[Rule::Required("Vui lòng chọn ngày sinh")] },
    FieldSpec { field: TeacherField::Phone, rules: &[Rule::Required("Vui lòng nhập số điện thoại")] },
    FieldSpec {
        field: TeacherField::Email,
        rules: &[Rule::Required("Vui lòng nhập email"), Rule::Email("Email không hợp lệ")],
    },
    FieldSpec { field: TeacherField::Identity, rules: &[Rule::Required("Vui lòng nhập số CCCD")] },
    FieldSpec { field: TeacherField::Address, rules: &[Rule::Required("Vui lòng nhập địa chỉ")] },
    FieldSpec { field: TeacherField::StartDate, rules: &[Rule::Required("Vui lòng chọn ngày bắt đầu")] },
];

/// Editable text columns of the degree sub-table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DegreeColumn {
    Level,
    School,
    Major,
    Year,
}

/// Draft of a new teacher as typed into the drawer
#[derive(Debug, Clone, PartialEq)]
pub struct TeacherForm {
    pub name: String,
    /// Raw value of the date input (YYYY-MM-DD or empty)
    pub dob: String,
    pub phone: String,
    pub email: String,
    pub identity: String,
    pub address: String,
    /// Selected position ids in selection order
    pub positions: Vec<String>,
    pub start_date: String,
    pub end_date: String,
    pub is_active: bool,
    /// Always holds at least one row; rows are only ever appended
    pub degrees: Vec<DegreeDraft>,
}

impl Default for TeacherForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            dob: String::new(),
            phone: String::new(),
            email: String::new(),
            identity: String::new(),
            address: String::new(),
            positions: Vec::new(),
            start_date: String::new(),
            end_date: String::new(),
            is_active: true,
            degrees: vec![DegreeDraft::default()],
        }
    }
}

impl TeacherForm {
    pub fn value(&self, field: TeacherField) -> &str {
        match field {
            TeacherField::Name => &self.name,
            TeacherField::Dob => &self.dob,
            TeacherField::Phone => &self.phone,
            TeacherField::Email => &self.email,
            TeacherField::Identity => &self.identity,
            TeacherField::Address => &self.address,
            TeacherField::StartDate => &self.start_date,
            TeacherField::EndDate => &self.end_date,
        }
    }

    pub fn set(&mut self, field: TeacherField, value: String) {
        let slot = match field {
            TeacherField::Name => &mut self.name,
            TeacherField::Dob => &mut self.dob,
            TeacherField::Phone => &mut self.phone,
            TeacherField::Email => &mut self.email,
            TeacherField::Identity => &mut self.identity,
            TeacherField::Address => &mut self.address,
            TeacherField::StartDate => &mut self.start_date,
            TeacherField::EndDate => &mut self.end_date,
        };
        *slot = value;
    }

    pub fn add_degree_row(&mut self) {
        self.degrees.push(DegreeDraft::default());
    }

    pub fn edit_degree(&mut self, index: usize, column: DegreeColumn, value: String) {
        if let Some(row) = self.degrees.get_mut(index) {
            match column {
                DegreeColumn::Level => row.level = value,
                DegreeColumn::School => row.school = value,
                DegreeColumn::Major => row.major = value,
                DegreeColumn::Year => row.year = value,
            }
        }
    }

    pub fn set_degree_graduated(&mut self, index: usize, graduated: bool) {
        if let Some(row) = self.degrees.get_mut(index) {
            row.is_graduated = graduated;
        }
    }

    pub fn validate(&self) -> FormErrors<TeacherField> {
        validate(TEACHER_FORM_SPECS, |field| self.value(field))
    }

    /// Build the create payload, or the field errors that block submission.
    ///
    /// Degree rows missing a level, school or major are left out.
    pub fn to_request(&self) -> Result<CreateTeacherRequest, FormErrors<TeacherField>> {
        let errors = self.validate();
        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(CreateTeacherRequest {
            name: self.name.clone(),
            dob: normalize_input_date(&self.dob),
            phone_number: self.phone.clone(),
            email: self.email.clone(),
            identity: self.identity.clone(),
            address: self.address.clone(),
            teacher_positions: self.positions.clone(),
            start_date: normalize_input_date(&self.start_date),
            end_date: normalize_input_date(&self.end_date),
            is_active: self.is_active,
            degrees: self.degrees.iter().filter(|d| d.is_complete()).cloned().collect(),
        })
    }
}

/// Everything that can happen to the teacher screen
#[derive(Debug, Clone, PartialEq)]
pub enum TeacherAction {
    PageRequested { ticket: RequestTicket },
    PageLoaded { ticket: RequestTicket, page: TeacherPage },
    PageFailed { ticket: RequestTicket },
    PositionsLoaded(Vec<Position>),
    SearchChanged(String),
    OpenDrawer,
    CloseDrawer,
    FieldChanged(TeacherField, String),
    PositionsSelected(Vec<String>),
    ActiveToggled(bool),
    DegreeRowAdded,
    DegreeEdited { index: usize, column: DegreeColumn, value: String },
    DegreeGraduatedToggled { index: usize, graduated: bool },
    SubmitRejected(FormErrors<TeacherField>),
    SubmitStarted,
    CreateSucceeded,
    CreateFailed(ApiError),
    NoticeDismissed(u32),
}

impl TeacherAction {
    /// Outcome of `POST /teachers`; any success counts, echoed record or not
    pub fn create_outcome<T>(result: Result<T, ApiError>) -> Self {
        match result {
            Ok(_) => TeacherAction::CreateSucceeded,
            Err(error) => TeacherAction::CreateFailed(error),
        }
    }
}

/// State of one mounted teacher screen
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TeacherDirectory {
    pub teachers: Vec<Teacher>,
    pub phase: LoadPhase,
    /// Pagination as last confirmed by the backend
    pub page: PageState,
    latest_page_request: Option<RequestTicket>,
    /// Options for the position multi-select
    pub position_options: Vec<Position>,
    /// Search box text; does not filter anything
    pub search_text: String,
    pub drawer_open: bool,
    pub form: TeacherForm,
    pub errors: FormErrors<TeacherField>,
    pub submitting: bool,
    pub notices: NoticeSlot,
}

impl TeacherDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_loading(&self) -> bool {
        self.phase == LoadPhase::Loading
    }

    /// The page on screen, which is what a reload or a finished create re-fetches
    pub fn refresh_target(&self) -> ListQuery {
        self.page.query()
    }

    pub fn apply(&mut self, action: TeacherAction) {
        match action {
            TeacherAction::PageRequested { ticket } => {
                self.latest_page_request = Some(ticket);
                self.phase = LoadPhase::Loading;
            }
            TeacherAction::PageLoaded { ticket, page } => {
                if self.latest_page_request != Some(ticket) {
                    return;
                }
                self.latest_page_request = None;
                self.teachers = page.teachers;
                self.page = PageState::from(page.pagination);
                self.phase = LoadPhase::Ready;
            }
            TeacherAction::PageFailed { ticket } => {
                if self.latest_page_request != Some(ticket) {
                    return;
                }
                self.latest_page_request = None;
                self.phase = LoadPhase::Error;
                self.notices.show(NoticeKind::Error, LOAD_FAILED_MESSAGE);
            }
            TeacherAction::PositionsLoaded(positions) => {
                self.position_options = positions;
            }
            TeacherAction::SearchChanged(text) => {
                self.search_text = text;
            }
            TeacherAction::OpenDrawer => {
                self.drawer_open = true;
            }
            TeacherAction::CloseDrawer => {
                self.drawer_open = false;
                self.reset_form();
            }
            TeacherAction::FieldChanged(field, value) => {
                self.form.set(field, value);
                self.errors.clear(field);
            }
            TeacherAction::PositionsSelected(ids) => {
                self.form.positions = ids;
            }
            TeacherAction::ActiveToggled(active) => {
                self.form.is_active = active;
            }
            TeacherAction::DegreeRowAdded => {
                self.form.add_degree_row();
            }
            TeacherAction::DegreeEdited { index, column, value } => {
                self.form.edit_degree(index, column, value);
            }
            TeacherAction::DegreeGraduatedToggled { index, graduated } => {
                self.form.set_degree_graduated(index, graduated);
            }
            TeacherAction::SubmitRejected(errors) => {
                self.errors = errors;
            }
            TeacherAction::SubmitStarted => {
                self.errors = FormErrors::default();
                self.submitting = true;
            }
            TeacherAction::CreateSucceeded => {
                self.submitting = false;
                self.drawer_open = false;
                self.reset_form();
                self.notices.show(NoticeKind::Success, CREATE_SUCCESS_MESSAGE);
            }
            TeacherAction::CreateFailed(error) => {
                self.submitting = false;
                self.notices.show(NoticeKind::Error, error.user_message(CREATE_FALLBACK_MESSAGE));
            }
            TeacherAction::NoticeDismissed(id) => {
                self.notices.dismiss(id);
            }
        }
    }

    fn reset_form(&mut self) {
        self.form = TeacherForm::default();
        self.errors = FormErrors::default();
    }
}
