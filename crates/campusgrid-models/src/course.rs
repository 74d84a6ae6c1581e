//! Course detail records and their mapper.

use crate::error::{SchemaError, warn_unknown_fields};
use crate::lesson::Lesson;
use campusgrid_ident::{Codec, ResourceType};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

/// A teacher on a course's detail page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct CourseTeacherItem {
    pub name: String,
    pub teacher_id: String,
    pub title: String,
    pub unit: String,
}

/// An enrolled student on a course's detail page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct CourseStudentItem {
    pub name: String,
    pub student_id: String,
    pub student_id_encoded: String,
    pub class_name: String,
    pub deputy: String,
}

/// Full course detail, including the enrolled students.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct CourseDetail {
    pub name: String,
    pub course_id: String,
    pub course_id_encoded: String,
    /// Name of the merged class group this course is taught to.
    pub union_name: String,
    pub hour: u32,
    #[schema(value_type = String)]
    pub lesson: Lesson,
    pub course_type: String,
    /// Number of students enrolled.
    pub pick_num: u32,
    pub room: String,
    pub room_id: String,
    pub room_id_encoded: String,
    pub students: Vec<CourseStudentItem>,
    /// Unique by raw teacher id, first occurrence wins.
    pub teachers: Vec<CourseTeacherItem>,
    pub week: Vec<u16>,
    pub week_string: String,
}

#[derive(Deserialize)]
struct RawCourseTeacher {
    name: String,
    #[serde(rename = "teacher_code")]
    teacher_id: String,
    title: String,
    unit: String,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

#[derive(Deserialize)]
struct RawCourseStudent {
    name: String,
    #[serde(rename = "student_code")]
    student_id: String,
    #[serde(rename = "class")]
    class_name: String,
    deputy: String,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

#[derive(Deserialize)]
struct RawCourseDetail {
    name: String,
    #[serde(rename = "course_code")]
    course_id: String,
    union_name: String,
    hour: u32,
    lesson: String,
    #[serde(rename = "type")]
    course_type: String,
    pick_num: u32,
    room: String,
    #[serde(rename = "room_code")]
    room_id: String,
    student_list: Vec<RawCourseStudent>,
    teacher_list: Vec<RawCourseTeacher>,
    week: Vec<u16>,
    week_string: String,
    #[serde(rename = "status")]
    _status: Option<String>,
    #[serde(rename = "info")]
    _info: Option<Value>,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl CourseDetail {
    /// Builds a course detail record from an upstream payload.
    pub fn from_payload(value: Value, codec: &Codec) -> Result<Self, SchemaError> {
        let raw: RawCourseDetail =
            serde_json::from_value(value).map_err(|e| SchemaError::payload("course", e))?;
        warn_unknown_fields("course", &raw.extra);

        let lesson = Lesson::parse("course", &raw.lesson)?;

        let mut teachers: Vec<CourseTeacherItem> = Vec::with_capacity(raw.teacher_list.len());
        for teacher in raw.teacher_list {
            warn_unknown_fields("course.teacher", &teacher.extra);
            if teachers.iter().any(|t| t.teacher_id == teacher.teacher_id) {
                continue;
            }
            teachers.push(CourseTeacherItem {
                name: teacher.name,
                teacher_id: teacher.teacher_id,
                title: teacher.title,
                unit: teacher.unit,
            });
        }

        let students = raw
            .student_list
            .into_iter()
            .map(|student| {
                warn_unknown_fields("course.student", &student.extra);
                CourseStudentItem {
                    student_id_encoded: codec.encode(ResourceType::Student, &student.student_id),
                    name: student.name,
                    student_id: student.student_id,
                    class_name: student.class_name,
                    deputy: student.deputy,
                }
            })
            .collect();

        Ok(Self {
            course_id_encoded: codec.encode(ResourceType::Course, &raw.course_id),
            room_id_encoded: codec.encode(ResourceType::Classroom, &raw.room_id),
            name: raw.name,
            course_id: raw.course_id,
            union_name: raw.union_name,
            hour: raw.hour,
            lesson,
            course_type: raw.course_type,
            pick_num: raw.pick_num,
            room: raw.room,
            room_id: raw.room_id,
            students,
            teachers,
            week: raw.week,
            week_string: raw.week_string,
        })
    }

    /// Joined display string of the teaching staff, `name + title` per
    /// teacher, separated the way the upstream UI expects.
    pub fn display_teachers(&self) -> String {
        self.teachers
            .iter()
            .map(|t| format!("{}{}", t.name, t.title))
            .collect::<Vec<_>>()
            .join("、")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn codec() -> Codec {
        Codec::new("models-test-secret")
    }

    fn course_payload() -> Value {
        json!({
            "status": "success",
            "name": "Operating Systems",
            "course_code": "OS301",
            "union_name": "1604",
            "hour": 48,
            "lesson": "30506",
            "type": "Required",
            "pick_num": 87,
            "room": "A-301",
            "room_code": "R0301",
            "student_list": [
                {"student_code": "3901160407", "name": "Wang", "class": "1604", "deputy": "SE"}
            ],
            "teacher_list": [
                {"teacher_code": "T100", "name": "Zhang", "title": "Prof.", "unit": "CS"},
                {"teacher_code": "T100", "name": "Zhang", "title": "Dean", "unit": "CS"}
            ],
            "week": [1, 2],
            "week_string": "1-2"
        })
    }

    #[test]
    fn test_course_detail_dedupes_teachers() {
        let course = CourseDetail::from_payload(course_payload(), &codec()).unwrap();
        assert_eq!(course.teachers.len(), 1);
        assert_eq!(course.teachers[0].title, "Prof.");
    }

    #[test]
    fn test_course_detail_display_teachers() {
        let mut payload = course_payload();
        payload.as_object_mut().unwrap().insert(
            "teacher_list".into(),
            json!([
                {"teacher_code": "T100", "name": "Zhang", "title": "Prof.", "unit": "CS"},
                {"teacher_code": "T200", "name": "Li", "title": "Dr.", "unit": "CS"}
            ]),
        );
        let course = CourseDetail::from_payload(payload, &codec()).unwrap();
        assert_eq!(course.display_teachers(), "ZhangProf.、LiDr.");
    }

    #[test]
    fn test_course_detail_type_rename() {
        let course = CourseDetail::from_payload(course_payload(), &codec()).unwrap();
        assert_eq!(course.course_type, "Required");
        assert_eq!(course.lesson.day(), 3);
    }

    #[test]
    fn test_course_detail_missing_students_fails() {
        let mut payload = course_payload();
        payload.as_object_mut().unwrap().remove("student_list");
        assert!(CourseDetail::from_payload(payload, &codec()).is_err());
    }

    #[test]
    fn test_course_detail_scalar_fields_are_required() {
        for field in ["union_name", "hour", "type", "pick_num", "week", "week_string"] {
            let mut payload = course_payload();
            payload.as_object_mut().unwrap().remove(field);
            assert!(
                CourseDetail::from_payload(payload, &codec()).is_err(),
                "missing `{field}` must not produce a default-filled record"
            );
        }
    }
}
