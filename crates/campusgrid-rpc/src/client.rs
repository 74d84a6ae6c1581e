//! The upstream API server client.

use crate::error::RpcError;
use campusgrid_ident::Codec;
use campusgrid_models::{
    ClassroomTimetable, CourseDetail, SearchResult, StudentTimetable, TeacherTimetable,
};
use serde_json::Value;
use std::fmt;
use std::time::Duration;
use tracing::{instrument, warn};

/// `status` value every successful upstream response must carry.
const STATUS_SUCCESS: &str = "success";

/// Client for the upstream directory/timetable service.
///
/// Cheap to clone; the inner `reqwest::Client` is already reference
/// counted. Each method performs one read-only lookup and maps the
/// payload into a typed record.
#[derive(Clone)]
pub struct ApiServerClient {
    http: reqwest::Client,
    base_url: String,
    codec: Codec,
}

impl fmt::Debug for ApiServerClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiServerClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl ApiServerClient {
    /// Creates a client for the given base URL.
    ///
    /// The timeout doubles as the caller-driven cancellation point: a
    /// request that exceeds it surfaces as a transport error, never as a
    /// partially-built record.
    pub fn new(
        base_url: impl Into<String>,
        timeout: Duration,
        codec: Codec,
    ) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            codec,
        })
    }

    /// Searches students, teachers and classrooms by keyword.
    #[instrument(skip(self))]
    pub async fn search(&self, keyword: &str) -> Result<SearchResult, RpcError> {
        let keyword = sanitize_keyword(keyword);
        let url = format!("{}/v2/search/{}", self.base_url, keyword);
        let payload = self.get_checked("search", &url).await?;
        Ok(SearchResult::from_payload(payload, &self.codec)?)
    }

    /// Fetches a student's timetable for one semester.
    #[instrument(skip(self))]
    pub async fn get_student_timetable(
        &self,
        student_id: &str,
        semester: &str,
    ) -> Result<StudentTimetable, RpcError> {
        let url = format!(
            "{}/v2/student/{}/timetable/{}",
            self.base_url, student_id, semester
        );
        let payload = self.get_checked("student_timetable", &url).await?;
        Ok(StudentTimetable::from_payload(payload, &self.codec)?)
    }

    /// Fetches a teacher's timetable for one semester.
    #[instrument(skip(self))]
    pub async fn get_teacher_timetable(
        &self,
        teacher_id: &str,
        semester: &str,
    ) -> Result<TeacherTimetable, RpcError> {
        let url = format!(
            "{}/v2/teacher/{}/timetable/{}",
            self.base_url, teacher_id, semester
        );
        let payload = self.get_checked("teacher_timetable", &url).await?;
        Ok(TeacherTimetable::from_payload(payload, &self.codec)?)
    }

    /// Fetches a classroom's timetable for one semester.
    #[instrument(skip(self))]
    pub async fn get_classroom_timetable(
        &self,
        semester: &str,
        room_id: &str,
    ) -> Result<ClassroomTimetable, RpcError> {
        let url = format!(
            "{}/v2/room/{}/timetable/{}",
            self.base_url, room_id, semester
        );
        let payload = self.get_checked("classroom_timetable", &url).await?;
        Ok(ClassroomTimetable::from_payload(payload, &self.codec)?)
    }

    /// Fetches a course's detail, including the enrolled students.
    #[instrument(skip(self))]
    pub async fn get_course(
        &self,
        semester: &str,
        course_id: &str,
    ) -> Result<CourseDetail, RpcError> {
        let url = format!("{}/v2/course/{}/{}", self.base_url, semester, course_id);
        let payload = self.get_checked("course", &url).await?;
        Ok(CourseDetail::from_payload(payload, &self.codec)?)
    }

    /// Performs a GET, retrying once on transport failure, and verifies
    /// the success sentinel.
    async fn get_checked(&self, endpoint: &'static str, url: &str) -> Result<Value, RpcError> {
        let response = match self.http.get(url).send().await {
            Ok(response) => response,
            Err(first) => {
                warn!(endpoint, error = %first, "transport failure, retrying once");
                self.http
                    .get(url)
                    .send()
                    .await
                    .map_err(|source| RpcError::Transport { endpoint, source })?
            }
        };

        let payload: Value = response
            .json()
            .await
            .map_err(|source| RpcError::Transport { endpoint, source })?;

        let status = payload
            .get("status")
            .and_then(Value::as_str)
            .unwrap_or_default();
        if status != STATUS_SUCCESS {
            // Application-level failure: not retried.
            return Err(RpcError::BadStatus {
                endpoint,
                status: status.to_string(),
            });
        }

        Ok(payload)
    }
}

/// Strips path separators so a hostile keyword cannot rewrite the
/// upstream URL.
fn sanitize_keyword(keyword: &str) -> String {
    keyword.replace('/', "")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_keyword_strips_slashes() {
        assert_eq!(sanitize_keyword("a/b//c"), "abc");
        assert_eq!(sanitize_keyword("3901160407"), "3901160407");
    }

    #[test]
    fn test_client_new_trims_trailing_slash() {
        let client = ApiServerClient::new(
            "http://api.example.edu/",
            Duration::from_secs(5),
            Codec::new("secret"),
        )
        .unwrap();
        assert_eq!(client.base_url, "http://api.example.edu");
    }
}
