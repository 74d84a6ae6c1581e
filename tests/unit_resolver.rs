use campusgrid::campusgrid_core::{
    contains_cjk, is_valid_semester, latest_semester, normalize_keyword, semester_views,
};
use campusgrid::campusgrid_models::{SearchClassroomItem, SearchResult, SearchStudentItem};
use campusgrid::modules::query::model::NavigationDecision;
use campusgrid::modules::query::service::classify;

fn empty_result() -> SearchResult {
    SearchResult {
        students: vec![],
        teachers: vec![],
        classrooms: vec![],
    }
}

#[test]
fn test_normalize_keyword_lowercases_alphanumeric_only() {
    assert_eq!(normalize_keyword("A101"), "a101");
    assert_eq!(normalize_keyword("3901160407"), "3901160407");
    assert_eq!(normalize_keyword("张三"), "张三");
    assert_eq!(normalize_keyword("A-101"), "A-101");
}

#[test]
fn test_contains_cjk() {
    assert!(contains_cjk("张三"));
    assert!(contains_cjk("教学楼A"));
    assert!(!contains_cjk("a101"));
}

#[test]
fn test_semester_format() {
    assert!(is_valid_semester("2019-2020-1"));
    assert!(is_valid_semester("2019-2020-3"));
    assert!(!is_valid_semester("2019-2020-4"));
    assert!(!is_valid_semester("2019-2020"));
    assert!(!is_valid_semester("19-20-1"));
    assert!(!is_valid_semester("2019-2020-1/../"));
}

#[test]
fn test_latest_semester_is_the_maximum() {
    let semesters = vec![
        "2018-2019-1".to_string(),
        "2019-2020-1".to_string(),
        "2018-2019-2".to_string(),
    ];
    assert_eq!(latest_semester(&semesters), Some("2019-2020-1"));
    assert_eq!(latest_semester(&[]), None);
}

#[test]
fn test_semester_views_flag_the_current_one() {
    let semesters = vec!["2018-2019-1".to_string(), "2019-2020-1".to_string()];
    let views = semester_views("2019-2020-1", &semesters);

    assert_eq!(views.len(), 2);
    assert!(!views[0].is_current);
    assert!(views[1].is_current);
}

#[test]
fn test_classroom_branch_wins_regardless_of_people() {
    let mut result = empty_result();
    result.students = vec![SearchStudentItem {
        student_id: "3901160407".to_string(),
        student_id_encoded: "enc-s".to_string(),
        name: "张三".to_string(),
        semesters: vec!["2019-2020-1".to_string()],
        deputy: String::new(),
        class_name: String::new(),
    }];
    result.classrooms = vec![SearchClassroomItem {
        room_id: "A101".to_string(),
        room_id_encoded: "enc-r".to_string(),
        name: "世纪楼A101".to_string(),
        semesters: vec!["2019-2020-1".to_string()],
    }];

    match classify("a101", result) {
        NavigationDecision::Redirect { resource, .. } => assert_eq!(resource, "classroom"),
        other => panic!("expected classroom redirect, got {other:?}"),
    }
}

#[test]
fn test_no_matches_is_not_found() {
    assert!(matches!(
        classify("nobody", empty_result()),
        NavigationDecision::NotFound { .. }
    ));
}

#[test]
fn test_single_student_redirect_targets_latest_semester() {
    let mut result = empty_result();
    result.students = vec![SearchStudentItem {
        student_id: "3901160407".to_string(),
        student_id_encoded: "enc-s".to_string(),
        name: "张三".to_string(),
        semesters: vec!["2018-2019-1".to_string(), "2019-2020-1".to_string()],
        deputy: String::new(),
        class_name: String::new(),
    }];

    match classify("3901160407", result) {
        NavigationDecision::Redirect { url, .. } => {
            assert_eq!(url, "/student/enc-s/2019-2020-1");
        }
        other => panic!("expected student redirect, got {other:?}"),
    }
}
