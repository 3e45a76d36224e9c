use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

pub mod dates;
pub mod error;
pub mod notice;
pub mod pagination;
pub mod position_screen;
pub mod request;
pub mod route;
pub mod teacher_screen;
pub mod validation;

pub use error::ApiError;
pub use notice::{Notice, NoticeKind, NoticeSlot};
pub use pagination::{ListQuery, PageState, PAGE_SIZE_OPTIONS};
pub use request::{LoadPhase, RequestTicket, RequestTracker};
pub use route::Route;

/// A teacher record as returned by `GET /teachers`.
///
/// The backend renders the list view with Vietnamese keys; the English
/// aliases cover records echoed back from `POST /teachers`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Teacher {
    #[serde(rename = "_id", deserialize_with = "lenient_text")]
    pub id: String,
    #[serde(deserialize_with = "lenient_text")]
    pub code: String,
    #[serde(rename = "ten", alias = "name", deserialize_with = "lenient_text")]
    pub name: String,
    #[serde(deserialize_with = "lenient_text")]
    pub email: String,
    #[serde(rename = "sdt", alias = "phoneNumber", deserialize_with = "lenient_text")]
    pub phone: String,
    #[serde(rename = "diaChi", alias = "address", deserialize_with = "lenient_text")]
    pub address: String,
    /// Position assignment label, already rendered by the backend
    #[serde(rename = "viTriCongTac", deserialize_with = "lenient_text")]
    pub position_label: String,
    /// Activity status label; "Đang hoạt động" means active
    #[serde(rename = "trangThaiHoatDong", deserialize_with = "lenient_text")]
    pub status_label: String,
    /// Academic degrees in the order the backend returned them
    #[serde(rename = "hocVan", alias = "degrees", deserialize_with = "lenient_list")]
    pub degrees: Vec<Degree>,
    pub dob: Option<String>,
    pub identity: Option<String>,
    #[serde(rename = "startDate")]
    pub start_date: Option<String>,
    #[serde(rename = "endDate")]
    pub end_date: Option<String>,
}

/// An academic degree embedded in a teacher record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Degree {
    #[serde(rename = "trinhDo", alias = "type", deserialize_with = "lenient_text")]
    pub level: String,
    #[serde(deserialize_with = "lenient_text")]
    pub school: String,
    #[serde(rename = "chuyenNganh", alias = "major", deserialize_with = "lenient_text")]
    pub major: String,
    /// Year as text; the backend may send either a number or a string
    #[serde(deserialize_with = "lenient_text")]
    pub year: String,
    #[serde(rename = "isGraduated", deserialize_with = "lenient_bool")]
    pub is_graduated: bool,
}

/// A work position a teacher can be assigned to
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Position {
    #[serde(rename = "_id", deserialize_with = "lenient_text")]
    pub id: String,
    #[serde(deserialize_with = "lenient_text")]
    pub code: String,
    #[serde(deserialize_with = "lenient_text")]
    pub name: String,
    #[serde(rename = "des", deserialize_with = "lenient_text")]
    pub description: String,
    #[serde(rename = "isActive", deserialize_with = "lenient_bool")]
    pub is_active: bool,
}

/// Pagination metadata for the teacher list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub page: u32,
    pub limit: u32,
    pub total: u64,
}

/// Response of `GET /teachers?page=&limit=`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeacherPage {
    pub teachers: Vec<Teacher>,
    pub pagination: Pagination,
}

/// Request body for `POST /teachers`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTeacherRequest {
    pub name: String,
    /// YYYY-MM-DD
    pub dob: Option<String>,
    pub phone_number: String,
    pub email: String,
    pub identity: String,
    pub address: String,
    /// Selected position ids (`_id`), empty when none selected
    pub teacher_positions: Vec<String>,
    /// YYYY-MM-DD
    pub start_date: Option<String>,
    /// YYYY-MM-DD
    pub end_date: Option<String>,
    pub is_active: bool,
    pub degrees: Vec<DegreeDraft>,
}

/// A degree row as edited in the creation form and sent to the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DegreeDraft {
    #[serde(rename = "type")]
    pub level: String,
    pub school: String,
    pub major: String,
    /// Raw text of the year input; never validated
    pub year: String,
    #[serde(rename = "isGraduated")]
    pub is_graduated: bool,
}

impl Default for DegreeDraft {
    fn default() -> Self {
        Self {
            level: String::new(),
            school: String::new(),
            major: String::new(),
            year: String::new(),
            is_graduated: true,
        }
    }
}

impl DegreeDraft {
    /// A row is submitted only when level, school and major are all filled in.
    pub fn is_complete(&self) -> bool {
        !self.level.is_empty() && !self.school.is_empty() && !self.major.is_empty()
    }
}

/// Request body for `POST /teacher-positions`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatePositionRequest {
    pub code: String,
    pub name: String,
    pub des: String,
    #[serde(rename = "isActive")]
    pub is_active: bool,
}

/// Error payload the backend may attach to a non-2xx response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

/// Decode the record a successful create echoes back.
///
/// Only used for logging: an empty or unexpected body gives `None` and the
/// create still counts as done.
pub fn decode_created<T: DeserializeOwned>(body: &str) -> Option<T> {
    if body.trim().is_empty() {
        return None;
    }
    serde_json::from_str(body).ok()
}

/// Accept strings, numbers, booleans or null where the UI only needs text.
fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(serde_json::Value::Null) => String::new(),
        Some(serde_json::Value::String(text)) => text,
        Some(other) => other.to_string(),
    })
}

fn lenient_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or_default())
}

fn lenient_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_teacher_deserializes_list_view_keys() {
        let raw = json!({
            "_id": "665f1c2e9b1d",
            "code": "GV0001",
            "ten": "Nguyễn Văn A",
            "email": "a@school.edu.vn",
            "sdt": "0901234567",
            "diaChi": "Hà Nội",
            "viTriCongTac": "Giáo viên chủ nhiệm",
            "trangThaiHoatDong": "Đang hoạt động",
            "hocVan": [
                { "trinhDo": "Cử nhân", "chuyenNganh": "Toán", "year": 2010, "isGraduated": true }
            ]
        });

        let teacher: Teacher = serde_json::from_value(raw).unwrap();
        assert_eq!(teacher.id, "665f1c2e9b1d");
        assert_eq!(teacher.name, "Nguyễn Văn A");
        assert_eq!(teacher.phone, "0901234567");
        assert_eq!(teacher.address, "Hà Nội");
        assert_eq!(teacher.degrees.len(), 1);
        assert_eq!(teacher.degrees[0].level, "Cử nhân");
        assert_eq!(teacher.degrees[0].major, "Toán");
        assert_eq!(teacher.degrees[0].year, "2010");
        assert!(teacher.dob.is_none());
    }

    #[test]
    fn test_teacher_tolerates_missing_and_null_fields() {
        let raw = json!({ "_id": "x", "code": "GV0002", "hocVan": null, "viTriCongTac": null });
        let teacher: Teacher = serde_json::from_value(raw).unwrap();
        assert!(teacher.degrees.is_empty());
        assert_eq!(teacher.position_label, "");
        assert_eq!(teacher.status_label, "");
    }

    #[test]
    fn test_null_row_fields_do_not_fail_the_page() {
        let raw = json!({
            "teachers": [
                { "_id": null, "code": null, "ten": "Lê C", "hocVan": [
                    { "trinhDo": "Cử nhân", "school": null, "isGraduated": null }
                ] },
                { "_id": "t2", "code": "GV0002", "ten": "Phạm D" }
            ],
            "pagination": { "page": 1, "limit": 10, "total": 2 }
        });
        let page: TeacherPage = serde_json::from_value(raw).unwrap();
        assert_eq!(page.teachers.len(), 2);
        assert_eq!(page.teachers[0].id, "");
        assert_eq!(page.teachers[0].code, "");
        assert_eq!(page.teachers[0].degrees[0].school, "");
        assert!(!page.teachers[0].degrees[0].is_graduated);
        assert_eq!(page.teachers[1].code, "GV0002");
    }

    #[test]
    fn test_position_list_tolerates_null_fields() {
        let raw = json!([
            { "_id": "p1", "code": "HT", "name": null, "des": null, "isActive": null },
            { "_id": null, "code": null, "name": "Giáo viên", "isActive": true }
        ]);
        let positions: Vec<Position> = serde_json::from_value(raw).unwrap();
        assert_eq!(positions[0].code, "HT");
        assert_eq!(positions[0].name, "");
        assert!(!positions[0].is_active);
        assert_eq!(positions[1].id, "");
        assert_eq!(positions[1].name, "Giáo viên");
        assert!(positions[1].is_active);
    }

    #[test]
    fn test_created_record_is_optional() {
        assert_eq!(decode_created::<Position>(""), None);
        assert_eq!(decode_created::<Teacher>("  \n"), None);
        assert_eq!(decode_created::<Teacher>("OK"), None);

        let position: Option<Position> =
            decode_created(r#"{"_id":"p9","code":"PHT","name":null,"isActive":true}"#);
        assert_eq!(position.map(|p| p.code), Some("PHT".to_string()));
    }

    #[test]
    fn test_teacher_page_deserializes() {
        let raw = json!({
            "teachers": [],
            "pagination": { "page": 2, "limit": 20, "total": 41 }
        });
        let page: TeacherPage = serde_json::from_value(raw).unwrap();
        assert_eq!(page.pagination, Pagination { page: 2, limit: 20, total: 41 });
    }

    #[test]
    fn test_position_uses_backend_keys() {
        let raw = json!({ "_id": "p1", "code": "HT", "name": "Hiệu trưởng", "des": "Quản lý", "isActive": false });
        let position: Position = serde_json::from_value(raw).unwrap();
        assert_eq!(position.description, "Quản lý");
        assert!(!position.is_active);

        let request = CreatePositionRequest {
            code: "HT".to_string(),
            name: "Hiệu trưởng".to_string(),
            des: "Quản lý".to_string(),
            is_active: true,
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({ "code": "HT", "name": "Hiệu trưởng", "des": "Quản lý", "isActive": true })
        );
    }

    #[test]
    fn test_create_teacher_request_wire_shape() {
        let request = CreateTeacherRequest {
            name: "Trần Thị B".to_string(),
            dob: Some("1990-05-01".to_string()),
            phone_number: "0912".to_string(),
            email: "b@school.edu.vn".to_string(),
            identity: "0010900001".to_string(),
            address: "Huế".to_string(),
            teacher_positions: vec![],
            start_date: Some("2015-09-01".to_string()),
            end_date: None,
            is_active: true,
            degrees: vec![DegreeDraft {
                level: "Thạc sĩ".to_string(),
                school: "ĐHSP".to_string(),
                major: "Văn".to_string(),
                year: "2014".to_string(),
                is_graduated: false,
            }],
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["phoneNumber"], "0912");
        assert_eq!(value["teacherPositions"], json!([]));
        assert_eq!(value["startDate"], "2015-09-01");
        assert_eq!(value["endDate"], serde_json::Value::Null);
        assert_eq!(value["isActive"], true);
        assert_eq!(
            value["degrees"][0],
            json!({ "type": "Thạc sĩ", "school": "ĐHSP", "major": "Văn", "year": "2014", "isGraduated": false })
        );
    }

    #[test]
    fn test_degree_draft_completeness() {
        let mut draft = DegreeDraft::default();
        assert!(draft.is_graduated);
        assert!(!draft.is_complete());

        draft.level = "Cử nhân".to_string();
        draft.school = "ĐHQG".to_string();
        assert!(!draft.is_complete());

        draft.major = "Lý".to_string();
        assert!(draft.is_complete());
    }
}
