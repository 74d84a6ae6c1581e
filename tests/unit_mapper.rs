use campusgrid::campusgrid_ident::{Codec, ResourceType};
use campusgrid::campusgrid_models::{CourseDetail, CourseRecord, SearchResult, StudentTimetable};
use serde_json::json;

fn test_codec() -> Codec {
    Codec::new("test_secret_key_for_testing_purposes")
}

fn student_payload() -> serde_json::Value {
    json!({
        "status": "success",
        "name": "张三",
        "student_code": "3901160407",
        "deputy": "计算机学院",
        "class": "计算机1601",
        "semester_list": ["2019-2020-1", "2018-2019-1", "2018-2019-2"],
        "course_list": [
            {
                "name": "高等数学",
                "course_code": "39010324",
                "room": "世纪楼A101",
                "room_code": "A101",
                "week": [1, 2, 3],
                "week_string": "1-3周",
                "lesson": "10304",
                "teacher_list": [
                    { "teacher_code": "10086", "name": "李四", "title": "教授" }
                ]
            }
        ]
    })
}

#[test]
fn test_student_timetable_renames_and_sorts() {
    let timetable = StudentTimetable::from_payload(student_payload(), &test_codec()).unwrap();

    assert_eq!(timetable.student_id, "3901160407");
    assert_eq!(timetable.class_name, "计算机1601");
    // Sorted ascending and assigned back, not discarded.
    assert_eq!(
        timetable.semesters,
        vec!["2018-2019-1", "2018-2019-2", "2019-2020-1"]
    );
    assert_eq!(timetable.courses.len(), 1);
}

#[test]
fn test_student_timetable_embeds_typed_identifiers() {
    let codec = test_codec();
    let timetable = StudentTimetable::from_payload(student_payload(), &codec).unwrap();

    assert_eq!(
        codec
            .decode(&timetable.student_id_encoded, ResourceType::Student)
            .unwrap(),
        "3901160407"
    );
    // A student handle must never decode as any other kind.
    assert!(
        codec
            .decode(&timetable.student_id_encoded, ResourceType::Classroom)
            .is_err()
    );

    let course = &timetable.courses[0];
    assert_eq!(
        codec
            .decode(&course.room_id_encoded, ResourceType::Classroom)
            .unwrap(),
        "A101"
    );
}

#[test]
fn test_missing_required_field_is_an_error() {
    let mut payload = student_payload();
    payload.as_object_mut().unwrap().remove("student_code");

    assert!(StudentTimetable::from_payload(payload, &test_codec()).is_err());
}

#[test]
fn test_unknown_fields_are_dropped_not_fatal() {
    let mut payload = student_payload();
    payload
        .as_object_mut()
        .unwrap()
        .insert("grade_point".to_string(), json!(4.0));

    assert!(StudentTimetable::from_payload(payload, &test_codec()).is_ok());
}

#[test]
fn test_mapping_is_idempotent() {
    let codec = test_codec();
    let first = StudentTimetable::from_payload(student_payload(), &codec).unwrap();
    let second = StudentTimetable::from_payload(student_payload(), &codec).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_course_teacher_dedup_keeps_first_occurrence() {
    let payload = json!({
        "name": "高等数学",
        "course_code": "39010324",
        "room": "世纪楼A101",
        "room_code": "A101",
        "week": [1, 2, 3],
        "week_string": "1-3周",
        "lesson": "10304",
        "teacher_list": [
            { "teacher_code": "10086", "name": "李四", "title": "教授" },
            { "teacher_code": "10086", "name": "李四", "title": "讲师" },
            { "teacher_code": "10087", "name": "王五", "title": "讲师" }
        ]
    });

    let course = CourseRecord::from_payload(payload, &test_codec()).unwrap();
    assert_eq!(course.teachers.len(), 2);
    assert_eq!(course.teachers[0].teacher_id, "10086");
    assert_eq!(course.teachers[0].title, "教授");
    assert_eq!(course.teachers[1].teacher_id, "10087");
}

#[test]
fn test_course_detail_display_teachers() {
    let payload = json!({
        "name": "高等数学",
        "course_code": "39010324",
        "union_name": "计算机1601-1602",
        "hour": 64,
        "lesson": "10304",
        "type": "必修",
        "pick_num": 80,
        "week": [1, 2, 3],
        "week_string": "1-3周",
        "room": "世纪楼A101",
        "room_code": "A101",
        "student_list": [
            { "student_code": "3901160407", "name": "张三", "class": "计算机1601", "deputy": "计算机学院" }
        ],
        "teacher_list": [
            { "teacher_code": "10086", "name": "李四", "title": "教授", "unit": "数学学院" },
            { "teacher_code": "10087", "name": "王五", "title": "讲师", "unit": "数学学院" }
        ]
    });

    let course = CourseDetail::from_payload(payload, &test_codec()).unwrap();
    assert_eq!(course.course_type, "必修");
    assert_eq!(course.display_teachers(), "李四教授、王五讲师");
    assert_eq!(course.students.len(), 1);
}

#[test]
fn test_search_result_maps_all_three_lists() {
    let payload = json!({
        "status": "success",
        "student_list": [
            {
                "student_code": "3901160407",
                "name": "张三",
                "semester_list": ["2019-2020-1", "2018-2019-1"],
                "deputy": "计算机学院",
                "class": "计算机1601"
            }
        ],
        "teacher_list": [
            {
                "teacher_code": "10086",
                "name": "李四",
                "semester_list": ["2019-2020-1"],
                "deputy": "数学学院"
            }
        ],
        "room_list": [
            {
                "room_code": "A101",
                "name": "世纪楼A101",
                "semester_list": ["2019-2020-1"]
            }
        ]
    });

    let result = SearchResult::from_payload(payload, &test_codec()).unwrap();
    assert_eq!(result.students.len(), 1);
    assert_eq!(result.teachers.len(), 1);
    assert_eq!(result.classrooms.len(), 1);
    assert_eq!(
        result.students[0].semesters,
        vec!["2018-2019-1", "2019-2020-1"]
    );
}
