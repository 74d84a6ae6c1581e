//! Search result records and their mapper.

use crate::error::{SchemaError, warn_unknown_fields};
use campusgrid_ident::{Codec, ResourceType};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

/// A student summary in a search result set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct SearchStudentItem {
    pub student_id: String,
    pub student_id_encoded: String,
    pub name: String,
    /// Sorted ascending; the last entry is the latest available semester.
    pub semesters: Vec<String>,
    pub deputy: String,
    pub class_name: String,
}

/// A teacher summary in a search result set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct SearchTeacherItem {
    pub teacher_id: String,
    pub teacher_id_encoded: String,
    pub name: String,
    pub semesters: Vec<String>,
    pub deputy: String,
}

/// A classroom summary in a search result set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct SearchClassroomItem {
    pub room_id: String,
    pub room_id_encoded: String,
    pub name: String,
    pub semesters: Vec<String>,
}

/// Classified search results, computed once per search and immutable
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct SearchResult {
    pub students: Vec<SearchStudentItem>,
    pub teachers: Vec<SearchTeacherItem>,
    pub classrooms: Vec<SearchClassroomItem>,
}

#[derive(Deserialize)]
struct RawStudentItem {
    #[serde(rename = "student_code")]
    student_id: String,
    name: String,
    #[serde(rename = "semester_list")]
    semesters: Vec<String>,
    deputy: String,
    #[serde(rename = "class")]
    class_name: String,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

#[derive(Deserialize)]
struct RawTeacherItem {
    #[serde(rename = "teacher_code")]
    teacher_id: String,
    name: String,
    #[serde(rename = "semester_list")]
    semesters: Vec<String>,
    deputy: String,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

#[derive(Deserialize)]
struct RawClassroomItem {
    #[serde(rename = "room_code")]
    room_id: String,
    name: String,
    #[serde(rename = "semester_list")]
    semesters: Vec<String>,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

#[derive(Deserialize)]
struct RawSearchResult {
    student_list: Vec<RawStudentItem>,
    teacher_list: Vec<RawTeacherItem>,
    room_list: Vec<RawClassroomItem>,
    #[serde(rename = "status")]
    _status: Option<String>,
    #[serde(rename = "info")]
    _info: Option<Value>,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

fn sorted(mut semesters: Vec<String>) -> Vec<String> {
    semesters.sort();
    semesters
}

impl SearchResult {
    /// Builds a classified search result set from an upstream payload.
    pub fn from_payload(value: Value, codec: &Codec) -> Result<Self, SchemaError> {
        let raw: RawSearchResult =
            serde_json::from_value(value).map_err(|e| SchemaError::payload("search", e))?;
        warn_unknown_fields("search", &raw.extra);

        let students = raw
            .student_list
            .into_iter()
            .map(|item| {
                warn_unknown_fields("search.student", &item.extra);
                SearchStudentItem {
                    student_id_encoded: codec.encode(ResourceType::Student, &item.student_id),
                    student_id: item.student_id,
                    name: item.name,
                    semesters: sorted(item.semesters),
                    deputy: item.deputy,
                    class_name: item.class_name,
                }
            })
            .collect();

        let teachers = raw
            .teacher_list
            .into_iter()
            .map(|item| {
                warn_unknown_fields("search.teacher", &item.extra);
                SearchTeacherItem {
                    teacher_id_encoded: codec.encode(ResourceType::Teacher, &item.teacher_id),
                    teacher_id: item.teacher_id,
                    name: item.name,
                    semesters: sorted(item.semesters),
                    deputy: item.deputy,
                }
            })
            .collect();

        let classrooms = raw
            .room_list
            .into_iter()
            .map(|item| {
                warn_unknown_fields("search.classroom", &item.extra);
                SearchClassroomItem {
                    room_id_encoded: codec.encode(ResourceType::Classroom, &item.room_id),
                    room_id: item.room_id,
                    name: item.name,
                    semesters: sorted(item.semesters),
                }
            })
            .collect();

        Ok(Self {
            students,
            teachers,
            classrooms,
        })
    }
}
