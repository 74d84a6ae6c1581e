//! Query resolution: classifies search results into a navigation decision.

use crate::modules::map_rpc_error;
use crate::modules::query::model::NavigationDecision;
use crate::state::AppState;
use campusgrid_core::{AppError, contains_cjk, latest_semester, normalize_keyword};
use campusgrid_ident::ResourceType;
use campusgrid_models::SearchResult;
use tracing::{info, instrument};

pub struct QueryService;

impl QueryService {
    /// Resolves a search-box keyword to a navigation decision.
    #[instrument(skip(state))]
    pub async fn resolve(state: &AppState, keyword: &str) -> Result<NavigationDecision, AppError> {
        let keyword = normalize_keyword(keyword.trim());
        if keyword.is_empty() {
            return Err(AppError::bad_request(anyhow::anyhow!(
                "enter a name, a student or staff number, or a classroom"
            )));
        }

        let result = state.rpc.search(&keyword).await.map_err(map_rpc_error)?;
        Ok(classify(&keyword, result))
    }
}

/// Classifies a search result, first matching branch wins:
///
/// 1. any classroom match (one: redirect, several: classroom list)
/// 2. exactly one student and no teachers
/// 3. exactly one teacher and no students
/// 4. any remaining mix of people
/// 5. nothing at all
pub fn classify(keyword: &str, result: SearchResult) -> NavigationDecision {
    let (resource_tag, decision) = if !result.classrooms.is_empty() {
        let decision = if result.classrooms.len() == 1 {
            let room = &result.classrooms[0];
            match latest_semester(&room.semesters) {
                Some(semester) => redirect(
                    ResourceType::Classroom,
                    room.room_id_encoded.clone(),
                    semester,
                ),
                None => NavigationDecision::NoSemester {
                    name: room.name.clone(),
                },
            }
        } else {
            NavigationDecision::ClassroomChoice {
                keyword: keyword.to_string(),
                classrooms: result.classrooms,
            }
        };
        ("classroom", decision)
    } else if result.students.len() == 1 && result.teachers.is_empty() {
        let student = &result.students[0];
        let decision = match latest_semester(&student.semesters) {
            Some(semester) => redirect(
                ResourceType::Student,
                student.student_id_encoded.clone(),
                semester,
            ),
            None => NavigationDecision::NoSemester {
                name: student.name.clone(),
            },
        };
        ("single_student", decision)
    } else if result.teachers.len() == 1 && result.students.is_empty() {
        let teacher = &result.teachers[0];
        let decision = match latest_semester(&teacher.semesters) {
            Some(semester) => redirect(
                ResourceType::Teacher,
                teacher.teacher_id_encoded.clone(),
                semester,
            ),
            None => NavigationDecision::NoSemester {
                name: teacher.name.clone(),
            },
        };
        ("single_teacher", decision)
    } else if !result.students.is_empty() || !result.teachers.is_empty() {
        let decision = NavigationDecision::PeopleChoice {
            keyword: keyword.to_string(),
            students: result.students,
            teachers: result.teachers,
        };
        ("multiple_people", decision)
    } else {
        let decision = NavigationDecision::NotFound {
            message: format!(
                "nothing found for `{keyword}`, check the spelling or try a student number"
            ),
        };
        ("not_exist", decision)
    };

    let query_type = match resource_tag {
        "classroom" => "by_name",
        "not_exist" => "other",
        _ if contains_cjk(keyword) => "by_name",
        _ => "by_id",
    };
    info!(
        query_resource_type = resource_tag,
        query_type, "query classified"
    );

    decision
}

fn redirect(resource: ResourceType, encoded_id: String, semester: &str) -> NavigationDecision {
    NavigationDecision::Redirect {
        url: format!("/{resource}/{encoded_id}/{semester}"),
        resource: resource.to_string(),
        encoded_id,
        semester: semester.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use campusgrid_models::{SearchClassroomItem, SearchStudentItem, SearchTeacherItem};

    fn student(semesters: &[&str]) -> SearchStudentItem {
        SearchStudentItem {
            student_id: "3901160407".to_string(),
            student_id_encoded: "enc-student".to_string(),
            name: "张三".to_string(),
            semesters: semesters.iter().map(|s| s.to_string()).collect(),
            deputy: "计算机学院".to_string(),
            class_name: "计算机1601".to_string(),
        }
    }

    fn teacher(semesters: &[&str]) -> SearchTeacherItem {
        SearchTeacherItem {
            teacher_id: "10086".to_string(),
            teacher_id_encoded: "enc-teacher".to_string(),
            name: "李四".to_string(),
            semesters: semesters.iter().map(|s| s.to_string()).collect(),
            deputy: "外国语学院".to_string(),
        }
    }

    fn classroom(semesters: &[&str]) -> SearchClassroomItem {
        SearchClassroomItem {
            room_id: "A101".to_string(),
            room_id_encoded: "enc-room".to_string(),
            name: "世纪楼A101".to_string(),
            semesters: semesters.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn result(
        students: Vec<SearchStudentItem>,
        teachers: Vec<SearchTeacherItem>,
        classrooms: Vec<SearchClassroomItem>,
    ) -> SearchResult {
        SearchResult {
            students,
            teachers,
            classrooms,
        }
    }

    #[test]
    fn test_classify_classroom_wins_over_any_mix() {
        let decision = classify(
            "a101",
            result(
                vec![student(&["2019-2020-1"])],
                vec![teacher(&["2019-2020-1"])],
                vec![classroom(&["2018-2019-2", "2019-2020-1"])],
            ),
        );
        match decision {
            NavigationDecision::Redirect {
                resource, semester, ..
            } => {
                assert_eq!(resource, "classroom");
                assert_eq!(semester, "2019-2020-1");
            }
            other => panic!("expected classroom redirect, got {other:?}"),
        }
    }

    #[test]
    fn test_classify_multiple_classrooms_lists_classrooms_only() {
        let decision = classify(
            "a101",
            result(
                vec![student(&["2019-2020-1"])],
                vec![],
                vec![classroom(&["2019-2020-1"]), classroom(&["2019-2020-1"])],
            ),
        );
        match decision {
            NavigationDecision::ClassroomChoice { classrooms, .. } => {
                assert_eq!(classrooms.len(), 2);
            }
            other => panic!("expected classroom choice, got {other:?}"),
        }
    }

    #[test]
    fn test_classify_single_student_redirects_to_latest_semester() {
        let decision = classify(
            "3901160407",
            result(
                vec![student(&["2018-2019-1", "2019-2020-1"])],
                vec![],
                vec![],
            ),
        );
        match decision {
            NavigationDecision::Redirect {
                resource,
                encoded_id,
                semester,
                url,
            } => {
                assert_eq!(resource, "student");
                assert_eq!(encoded_id, "enc-student");
                assert_eq!(semester, "2019-2020-1");
                assert_eq!(url, "/student/enc-student/2019-2020-1");
            }
            other => panic!("expected student redirect, got {other:?}"),
        }
    }

    #[test]
    fn test_classify_single_student_without_semesters() {
        let decision = classify("3901160407", result(vec![student(&[])], vec![], vec![]));
        assert_eq!(
            decision,
            NavigationDecision::NoSemester {
                name: "张三".to_string()
            }
        );
    }

    #[test]
    fn test_classify_single_teacher_redirects() {
        let decision = classify(
            "10086",
            result(vec![], vec![teacher(&["2019-2020-1"])], vec![]),
        );
        match decision {
            NavigationDecision::Redirect { resource, url, .. } => {
                assert_eq!(resource, "teacher");
                assert_eq!(url, "/teacher/enc-teacher/2019-2020-1");
            }
            other => panic!("expected teacher redirect, got {other:?}"),
        }
    }

    #[test]
    fn test_classify_mixed_people_lists_both() {
        let decision = classify(
            "张三",
            result(
                vec![student(&["2019-2020-1"]), student(&["2019-2020-1"])],
                vec![teacher(&["2019-2020-1"])],
                vec![],
            ),
        );
        match decision {
            NavigationDecision::PeopleChoice {
                students, teachers, ..
            } => {
                assert_eq!(students.len(), 2);
                assert_eq!(teachers.len(), 1);
            }
            other => panic!("expected people choice, got {other:?}"),
        }
    }

    #[test]
    fn test_classify_one_student_one_teacher_is_a_choice_not_a_redirect() {
        let decision = classify(
            "张三",
            result(
                vec![student(&["2019-2020-1"])],
                vec![teacher(&["2019-2020-1"])],
                vec![],
            ),
        );
        assert!(matches!(decision, NavigationDecision::PeopleChoice { .. }));
    }

    #[test]
    fn test_classify_nothing_found() {
        let decision = classify("nobody", result(vec![], vec![], vec![]));
        assert!(matches!(decision, NavigationDecision::NotFound { .. }));
    }
}
