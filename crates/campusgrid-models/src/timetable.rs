//! Timetable records and their payload mappers.
//!
//! The upstream timetable payloads arrive with renamed fields
//! (`student_code`, `teacher_code`, `room_code`, `class`) and raw nested
//! lists. Each record type has one builder that validates the shape,
//! renames fields, sorts semester lists, deduplicates teachers and embeds
//! encoded identifiers. Builders run bottom-up: a course's teachers are
//! built before the course, courses before the timetable embedding them.

use crate::error::{SchemaError, warn_unknown_fields};
use crate::lesson::Lesson;
use campusgrid_ident::{Codec, ResourceType};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

/// A teacher reference inside a course meeting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct TeacherRef {
    pub teacher_id: String,
    pub teacher_id_encoded: String,
    pub name: String,
    pub title: String,
}

/// One course meeting on a timetable.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct CourseRecord {
    pub name: String,
    pub course_id: String,
    pub course_id_encoded: String,
    pub room: String,
    pub room_id: String,
    pub room_id_encoded: String,
    /// Weeks in which the meeting takes place.
    pub week: Vec<u16>,
    pub week_string: String,
    #[schema(value_type = String)]
    pub lesson: Lesson,
    /// Unique by raw teacher id, first occurrence wins.
    pub teachers: Vec<TeacherRef>,
}

#[derive(Deserialize)]
struct RawTeacherRef {
    #[serde(rename = "teacher_code")]
    teacher_id: String,
    name: String,
    title: String,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

#[derive(Deserialize)]
struct RawCourse {
    name: String,
    #[serde(rename = "course_code")]
    course_id: String,
    room: String,
    #[serde(rename = "room_code")]
    room_id: String,
    week: Vec<u16>,
    week_string: String,
    lesson: String,
    teacher_list: Vec<RawTeacherRef>,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl CourseRecord {
    /// Builds a course meeting record from an upstream payload.
    pub fn from_payload(value: Value, codec: &Codec) -> Result<Self, SchemaError> {
        let raw: RawCourse =
            serde_json::from_value(value).map_err(|e| SchemaError::payload("course", e))?;
        warn_unknown_fields("course", &raw.extra);

        let lesson = Lesson::parse("course", &raw.lesson)?;

        // Upstream repeats a teacher once per role; keep the first.
        let mut teachers: Vec<TeacherRef> = Vec::with_capacity(raw.teacher_list.len());
        for teacher in raw.teacher_list {
            warn_unknown_fields("course.teacher", &teacher.extra);
            if teachers.iter().any(|t| t.teacher_id == teacher.teacher_id) {
                continue;
            }
            teachers.push(TeacherRef {
                teacher_id_encoded: codec.encode(ResourceType::Teacher, &teacher.teacher_id),
                teacher_id: teacher.teacher_id,
                name: teacher.name,
                title: teacher.title,
            });
        }

        Ok(Self {
            course_id_encoded: codec.encode(ResourceType::Course, &raw.course_id),
            room_id_encoded: codec.encode(ResourceType::Classroom, &raw.room_id),
            name: raw.name,
            course_id: raw.course_id,
            room: raw.room,
            room_id: raw.room_id,
            week: raw.week,
            week_string: raw.week_string,
            lesson,
            teachers,
        })
    }
}

/// A student's timetable for one semester.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct StudentTimetable {
    pub name: String,
    pub student_id: String,
    pub student_id_encoded: String,
    /// Faculty the student belongs to.
    pub deputy: String,
    pub class_name: String,
    /// Semesters with timetable data, sorted ascending.
    pub semesters: Vec<String>,
    pub courses: Vec<CourseRecord>,
}

#[derive(Deserialize)]
struct RawStudentTimetable {
    name: String,
    #[serde(rename = "student_code")]
    student_id: String,
    deputy: String,
    #[serde(rename = "class")]
    class_name: String,
    #[serde(rename = "semester_list", default)]
    semesters: Vec<String>,
    #[serde(rename = "course_list")]
    courses: Vec<Value>,
    #[serde(rename = "status")]
    _status: Option<String>,
    #[serde(rename = "info")]
    _info: Option<Value>,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl StudentTimetable {
    pub fn from_payload(value: Value, codec: &Codec) -> Result<Self, SchemaError> {
        let raw: RawStudentTimetable =
            serde_json::from_value(value).map_err(|e| SchemaError::payload("student", e))?;
        warn_unknown_fields("student", &raw.extra);

        let courses = raw
            .courses
            .into_iter()
            .map(|c| CourseRecord::from_payload(c, codec))
            .collect::<Result<Vec<_>, _>>()?;

        let mut semesters = raw.semesters;
        semesters.sort();

        Ok(Self {
            student_id_encoded: codec.encode(ResourceType::Student, &raw.student_id),
            name: raw.name,
            student_id: raw.student_id,
            deputy: raw.deputy,
            class_name: raw.class_name,
            semesters,
            courses,
        })
    }
}

/// A teacher's timetable for one semester.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct TeacherTimetable {
    pub name: String,
    pub teacher_id: String,
    pub teacher_id_encoded: String,
    pub title: String,
    /// Unit (school/department) the teacher belongs to.
    pub unit: String,
    /// Semesters with timetable data, sorted ascending.
    pub semesters: Vec<String>,
    pub courses: Vec<CourseRecord>,
}

#[derive(Deserialize)]
struct RawTeacherTimetable {
    name: String,
    #[serde(rename = "teacher_code")]
    teacher_id: String,
    title: String,
    unit: String,
    #[serde(rename = "semester_list", default)]
    semesters: Vec<String>,
    #[serde(rename = "course_list")]
    courses: Vec<Value>,
    #[serde(rename = "status")]
    _status: Option<String>,
    #[serde(rename = "info")]
    _info: Option<Value>,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl TeacherTimetable {
    pub fn from_payload(value: Value, codec: &Codec) -> Result<Self, SchemaError> {
        let raw: RawTeacherTimetable =
            serde_json::from_value(value).map_err(|e| SchemaError::payload("teacher", e))?;
        warn_unknown_fields("teacher", &raw.extra);

        let courses = raw
            .courses
            .into_iter()
            .map(|c| CourseRecord::from_payload(c, codec))
            .collect::<Result<Vec<_>, _>>()?;

        let mut semesters = raw.semesters;
        semesters.sort();

        Ok(Self {
            teacher_id_encoded: codec.encode(ResourceType::Teacher, &raw.teacher_id),
            name: raw.name,
            teacher_id: raw.teacher_id,
            title: raw.title,
            unit: raw.unit,
            semesters,
            courses,
        })
    }
}

/// A classroom's timetable for one semester.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ClassroomTimetable {
    pub room_id: String,
    pub room_id_encoded: String,
    pub name: String,
    pub building: String,
    pub campus: String,
    /// The semester this timetable was fetched for, as reported upstream.
    pub semester: Option<String>,
    /// Semesters with timetable data, sorted ascending. Authoritative for
    /// the semester switcher; `semester` is display-only.
    pub semesters: Vec<String>,
    pub courses: Vec<CourseRecord>,
}

#[derive(Deserialize)]
struct RawClassroomTimetable {
    #[serde(rename = "room_code")]
    room_id: String,
    name: String,
    building: String,
    campus: String,
    #[serde(default)]
    semester: Option<String>,
    #[serde(rename = "semester_list", default)]
    semesters: Vec<String>,
    #[serde(rename = "course_list", default)]
    courses: Vec<Value>,
    #[serde(rename = "status")]
    _status: Option<String>,
    #[serde(rename = "info")]
    _info: Option<Value>,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl ClassroomTimetable {
    pub fn from_payload(value: Value, codec: &Codec) -> Result<Self, SchemaError> {
        let raw: RawClassroomTimetable =
            serde_json::from_value(value).map_err(|e| SchemaError::payload("classroom", e))?;
        warn_unknown_fields("classroom", &raw.extra);

        let courses = raw
            .courses
            .into_iter()
            .map(|c| CourseRecord::from_payload(c, codec))
            .collect::<Result<Vec<_>, _>>()?;

        let mut semesters = raw.semesters;
        semesters.sort();

        Ok(Self {
            room_id_encoded: codec.encode(ResourceType::Classroom, &raw.room_id),
            room_id: raw.room_id,
            name: raw.name,
            building: raw.building,
            campus: raw.campus,
            semester: raw.semester,
            semesters,
            courses,
        })
    }
}
