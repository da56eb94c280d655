//! Gallery state machine.
//!
//! [`GalleryController`] is pure state: it performs no I/O and holds no
//! clocks. Operation outcomes are fed in, follow-up [`Action`]s come out,
//! and the shell executes them and reports back with the next outcome.

mod failure;

pub use failure::ApiFailure;

use crate::draft::UploadDraft;
use crate::session::Session;
use crate::toast::Toast;
use gallerydesk_api::{GalleryPhoto, NewPhoto, PhotoId};
use std::collections::HashSet;
use std::mem;
use tracing::{debug, warn};

const WELCOME_TOAST: &str = "Welcome back!";
const LOGGED_OUT_TOAST: &str = "You have been logged out.";
const UPLOADED_TOAST: &str = "Photo uploaded successfully.";
const DELETED_TOAST: &str = "Photo removed from gallery.";
const INVALID_CREDENTIALS_TOAST: &str = "Invalid credentials. Please try again.";
const SESSION_EXPIRED_TOAST: &str = "Session expired. Please log in again.";
const LOGIN_OFFLINE_TOAST: &str = "Backend unreachable. Check the connection and try again.";
const PHOTOS_OFFLINE_TOAST: &str = "Backend server is offline. Reconnect to manage the gallery.";
const UPLOAD_OFFLINE_TOAST: &str = "Upload failed. Confirm the backend is running.";
const DELETE_OFFLINE_TOAST: &str = "Unable to delete. Check the backend connection.";

/// Lifecycle phase of the gallery screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Phase {
    /// No session; the login screen shows.
    #[default]
    Unauthenticated,
    /// Session held, photo list fetch in flight.
    LoadingPhotos,
    /// Photo list on screen.
    Ready,
    /// An upload is in flight.
    Uploading,
}

impl Phase {
    /// Whether this phase belongs to a signed-in session.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        !matches!(self, Self::Unauthenticated)
    }
}

/// Follow-up work the shell must execute after a state change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Write the session to durable storage.
    PersistSession(Session),
    /// Remove the session from durable storage.
    ClearSession,
    /// Fetch the photo list with this token.
    LoadPhotos {
        /// Bearer token to authenticate the fetch.
        token: String,
    },
    /// Tell the backend the session ended. Best effort, failures ignored.
    PostLogout {
        /// Token of the session being closed.
        token: String,
    },
}

/// State behind the admin gallery.
///
/// Owns everything the views render: the lifecycle phase, the session, the
/// photo list (newest first, ids unique), the backend-online flag and the
/// single toast slot. Every mutation updates the list from the operation's
/// own response instead of refetching the collection.
#[derive(Debug, Clone)]
pub struct GalleryController {
    phase: Phase,
    session: Session,
    photos: Vec<GalleryPhoto>,
    backend_online: bool,
    toast: Option<Toast>,
    toast_seq: u64,
}

impl Default for GalleryController {
    fn default() -> Self {
        Self {
            phase: Phase::default(),
            session: Session::anonymous(),
            photos: Vec::new(),
            backend_online: true,
            toast: None,
            toast_seq: 0,
        }
    }
}

impl GalleryController {
    /// Creates a fresh unauthenticated controller.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current lifecycle phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Current session.
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Photos in display order, newest first.
    #[must_use]
    pub fn photos(&self) -> &[GalleryPhoto] {
        &self.photos
    }

    /// Whether the most recent network call reached the backend.
    #[must_use]
    pub const fn backend_online(&self) -> bool {
        self.backend_online
    }

    /// Whether upload and delete controls should accept input.
    #[must_use]
    pub const fn can_mutate(&self) -> bool {
        matches!(self.phase, Phase::Ready) && self.backend_online
    }

    /// Toast currently on screen.
    #[must_use]
    pub const fn toast(&self) -> Option<&Toast> {
        self.toast.as_ref()
    }

    /// Sequence number of the current toast slot.
    ///
    /// Expiry timers carry this number back through [`Self::toast_expired`]
    /// so a timer armed for an older toast cannot dismiss a newer one.
    #[must_use]
    pub const fn toast_seq(&self) -> u64 {
        self.toast_seq
    }

    /// Seeds the controller with whatever the session store read at startup.
    pub fn restore_session(&mut self, session: Session) -> Vec<Action> {
        if !session.is_authenticated() {
            debug!("no stored session, starting at the login screen");
            return Vec::new();
        }
        debug!(user = ?session.username(), "restoring stored session");
        let token = session.token.clone();
        self.session = session;
        self.phase = Phase::LoadingPhotos;
        vec![Action::LoadPhotos { token }]
    }

    /// Applies a login outcome.
    ///
    /// Success stores and persists the session and kicks off the photo
    /// fetch. A credential rejection leaves the phase alone; only an
    /// unreachable backend flips the online flag.
    pub fn login_finished(&mut self, outcome: Result<Session, ApiFailure>) -> Vec<Action> {
        match outcome {
            Ok(session) if session.is_authenticated() => {
                debug!(user = ?session.username(), "login accepted");
                let token = session.token.clone();
                self.session = session;
                self.phase = Phase::LoadingPhotos;
                self.backend_online = true;
                self.set_toast(Toast::success(WELCOME_TOAST));
                vec![
                    Action::PersistSession(self.session.clone()),
                    Action::LoadPhotos { token },
                ]
            }
            Ok(_) => {
                // A 2xx answer without a usable token reads as a refusal.
                self.set_toast(Toast::error(INVALID_CREDENTIALS_TOAST));
                Vec::new()
            }
            Err(failure) => {
                self.login_failed(&failure);
                Vec::new()
            }
        }
    }

    fn login_failed(&mut self, failure: &ApiFailure) {
        match failure {
            ApiFailure::Unauthorized => {
                self.set_toast(Toast::error(INVALID_CREDENTIALS_TOAST));
            }
            ApiFailure::Offline { message } => {
                warn!(%message, "login could not reach the backend");
                self.backend_online = false;
                self.set_toast(Toast::error(LOGIN_OFFLINE_TOAST));
            }
            ApiFailure::Rejected { message } => {
                self.set_toast(Toast::error(message.clone()));
            }
        }
    }

    /// Applies the photo-list outcome.
    ///
    /// Outcomes that arrive after the session was cleared are dropped.
    pub fn photos_loaded(
        &mut self,
        outcome: Result<Vec<GalleryPhoto>, ApiFailure>,
    ) -> Vec<Action> {
        if !self.session.is_authenticated() {
            debug!("dropping a photo list that arrived after sign-out");
            return Vec::new();
        }
        match outcome {
            Ok(photos) => {
                debug!(count = photos.len(), "photo list loaded");
                self.photos = dedup_by_id(photos);
                self.phase = Phase::Ready;
                self.backend_online = true;
                Vec::new()
            }
            Err(ApiFailure::Unauthorized) => self.expire_session(),
            Err(ApiFailure::Offline { message }) => {
                warn!(%message, "photo list fetch could not reach the backend");
                self.phase = Phase::Ready;
                self.backend_online = false;
                self.set_toast(Toast::error(PHOTOS_OFFLINE_TOAST));
                Vec::new()
            }
            Err(ApiFailure::Rejected { message }) => {
                self.phase = Phase::Ready;
                self.set_toast(Toast::error(message));
                Vec::new()
            }
        }
    }

    /// Validates a draft and, when it passes, enters the uploading phase.
    ///
    /// Returns the wire payload the shell should submit, or `None` when the
    /// draft is invalid (an error toast is raised) or the controller is not
    /// accepting mutations.
    pub fn begin_upload(&mut self, draft: &UploadDraft) -> Option<NewPhoto> {
        if !self.can_mutate() {
            return None;
        }
        if let Err(errors) = draft.validate() {
            if let Some(first) = errors.first() {
                self.set_toast(Toast::error(first.message()));
            }
            return None;
        }
        let payload = draft.to_new_photo()?;
        debug!(title = %payload.title, "upload started");
        self.phase = Phase::Uploading;
        Some(payload)
    }

    /// Applies an upload outcome.
    ///
    /// Success prepends the created record, replacing any stale entry that
    /// carries the same id. On failure the list is untouched and the shell
    /// keeps the draft so typed input survives.
    pub fn upload_finished(&mut self, outcome: Result<GalleryPhoto, ApiFailure>) -> Vec<Action> {
        if !self.session.is_authenticated() {
            debug!("dropping an upload outcome that arrived after sign-out");
            return Vec::new();
        }
        match outcome {
            Ok(photo) => {
                debug!(id = %photo.id, "upload finished");
                self.phase = Phase::Ready;
                self.backend_online = true;
                self.photos.retain(|existing| existing.id != photo.id);
                self.photos.insert(0, photo);
                self.set_toast(Toast::success(UPLOADED_TOAST));
                Vec::new()
            }
            Err(ApiFailure::Unauthorized) => self.expire_session(),
            Err(ApiFailure::Offline { message }) => {
                warn!(%message, "upload could not reach the backend");
                self.phase = Phase::Ready;
                self.backend_online = false;
                self.set_toast(Toast::error(UPLOAD_OFFLINE_TOAST));
                Vec::new()
            }
            Err(ApiFailure::Rejected { message }) => {
                self.phase = Phase::Ready;
                self.set_toast(Toast::error(message));
                Vec::new()
            }
        }
    }

    /// Applies a delete outcome for the given photo.
    ///
    /// Success removes exactly the matching record.
    pub fn delete_finished(&mut self, id: &PhotoId, outcome: Result<(), ApiFailure>) -> Vec<Action> {
        if !self.session.is_authenticated() {
            debug!("dropping a delete outcome that arrived after sign-out");
            return Vec::new();
        }
        match outcome {
            Ok(()) => {
                debug!(%id, "photo deleted");
                self.backend_online = true;
                self.photos.retain(|photo| &photo.id != id);
                self.set_toast(Toast::info(DELETED_TOAST));
                Vec::new()
            }
            Err(ApiFailure::Unauthorized) => self.expire_session(),
            Err(ApiFailure::Offline { message }) => {
                warn!(%message, "delete could not reach the backend");
                self.backend_online = false;
                self.set_toast(Toast::error(DELETE_OFFLINE_TOAST));
                Vec::new()
            }
            Err(ApiFailure::Rejected { message }) => {
                self.set_toast(Toast::error(message));
                Vec::new()
            }
        }
    }

    /// Ends the session locally and emits the best-effort backend notice.
    pub fn logout(&mut self) -> Vec<Action> {
        debug!("signing out");
        let session = mem::take(&mut self.session);
        self.photos.clear();
        self.phase = Phase::Unauthenticated;
        self.set_toast(Toast::info(LOGGED_OUT_TOAST));

        let mut actions = Vec::new();
        if session.is_authenticated() {
            actions.push(Action::PostLogout {
                token: session.token,
            });
        }
        actions.push(Action::ClearSession);
        actions
    }

    /// Refetches the photo list after a connectivity failure.
    pub fn retry(&mut self) -> Vec<Action> {
        if !self.session.is_authenticated() {
            return Vec::new();
        }
        debug!("retrying the photo list fetch");
        self.phase = Phase::LoadingPhotos;
        vec![Action::LoadPhotos {
            token: self.session.token.clone(),
        }]
    }

    /// Shows an error toast without touching the rest of the state.
    ///
    /// For failures raised outside the controller, like an unreadable
    /// picked file.
    pub fn report_error(&mut self, message: impl Into<String>) {
        self.set_toast(Toast::error(message));
    }

    /// Clears the toast when the expiry timer that fired matches it.
    pub fn toast_expired(&mut self, seq: u64) {
        if self.toast_seq == seq {
            self.toast = None;
        }
    }

    /// Clears the toast immediately.
    pub fn dismiss_toast(&mut self) {
        self.toast = None;
    }

    /// The 401 path: the stored token is no longer honored.
    fn expire_session(&mut self) -> Vec<Action> {
        warn!("backend rejected the stored token, resetting the session");
        self.session = Session::anonymous();
        self.photos.clear();
        self.phase = Phase::Unauthenticated;
        self.set_toast(Toast::error(SESSION_EXPIRED_TOAST));
        vec![Action::ClearSession]
    }

    fn set_toast(&mut self, toast: Toast) {
        self.toast_seq = self.toast_seq.wrapping_add(1);
        self.toast = Some(toast);
    }
}

/// Keeps the first occurrence of every id.
fn dedup_by_id(photos: Vec<GalleryPhoto>) -> Vec<GalleryPhoto> {
    let mut seen = HashSet::with_capacity(photos.len());
    photos
        .into_iter()
        .filter(|photo| seen.insert(photo.id.clone()))
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::draft::DraftFile;
    use crate::toast::ToastStatus;
    use bytes::Bytes;
    use gallerydesk_api::UserProfile;

    fn photo(id: i64, title: &str) -> GalleryPhoto {
        GalleryPhoto {
            id: PhotoId::from(id),
            title: title.to_owned(),
            category: None,
            notes: None,
            image_url: None,
            created_at: None,
        }
    }

    fn admin_session() -> Session {
        Session::authenticated(
            "abc",
            Some(UserProfile {
                username: "admin".to_owned(),
            }),
        )
    }

    fn signed_in() -> GalleryController {
        let mut controller = GalleryController::new();
        let _ = controller.login_finished(Ok(admin_session()));
        controller
    }

    fn ready() -> GalleryController {
        let mut controller = signed_in();
        let _ = controller.photos_loaded(Ok(Vec::new()));
        controller
    }

    fn valid_draft() -> UploadDraft {
        UploadDraft {
            title: "Sunset".to_owned(),
            category: "Nature".to_owned(),
            notes: String::new(),
            file: Some(DraftFile {
                name: "sunset.png".to_owned(),
                content_type: "image/png".to_owned(),
                bytes: Bytes::from(vec![0u8; 2 * 1024 * 1024]),
            }),
        }
    }

    #[test]
    fn test_restore_with_token_fetches_photos() {
        let mut controller = GalleryController::new();
        let actions = controller.restore_session(admin_session());
        assert_eq!(controller.phase(), Phase::LoadingPhotos);
        assert_eq!(
            actions,
            vec![Action::LoadPhotos {
                token: "abc".to_owned()
            }]
        );
    }

    #[test]
    fn test_restore_without_token_stays_unauthenticated() {
        let mut controller = GalleryController::new();
        let actions = controller.restore_session(Session::anonymous());
        assert_eq!(controller.phase(), Phase::Unauthenticated);
        assert!(actions.is_empty());
    }

    #[test]
    fn test_login_success_persists_and_fetches() {
        let mut controller = GalleryController::new();
        let actions = controller.login_finished(Ok(admin_session()));
        assert_eq!(controller.phase(), Phase::LoadingPhotos);
        assert_eq!(
            actions,
            vec![
                Action::PersistSession(admin_session()),
                Action::LoadPhotos {
                    token: "abc".to_owned()
                },
            ]
        );
        let toast = controller.toast().unwrap();
        assert_eq!(toast.status, ToastStatus::Success);
        assert_eq!(toast.message, "Welcome back!");
    }

    #[test]
    fn test_login_rejection_keeps_backend_online() {
        let mut controller = GalleryController::new();
        let actions = controller.login_finished(Err(ApiFailure::Rejected {
            message: "Invalid credentials. Please try again.".to_owned(),
        }));
        assert!(actions.is_empty());
        assert_eq!(controller.phase(), Phase::Unauthenticated);
        assert!(controller.backend_online());
        let toast = controller.toast().unwrap();
        assert_eq!(toast.status, ToastStatus::Error);
        assert_eq!(toast.message, "Invalid credentials. Please try again.");
    }

    #[test]
    fn test_login_offline_flags_backend() {
        let mut controller = GalleryController::new();
        let _ = controller.login_finished(Err(ApiFailure::Offline {
            message: "connection refused".to_owned(),
        }));
        assert!(!controller.backend_online());
        assert_eq!(controller.phase(), Phase::Unauthenticated);
        assert_eq!(
            controller.toast().unwrap().message,
            "Backend unreachable. Check the connection and try again."
        );
    }

    #[test]
    fn test_login_without_token_reads_as_refusal() {
        let mut controller = GalleryController::new();
        let actions = controller.login_finished(Ok(Session::anonymous()));
        assert!(actions.is_empty());
        assert_eq!(controller.phase(), Phase::Unauthenticated);
        assert_eq!(
            controller.toast().unwrap().message,
            "Invalid credentials. Please try again."
        );
    }

    #[test]
    fn test_photos_loaded_enters_ready() {
        let mut controller = signed_in();
        let actions = controller.photos_loaded(Ok(vec![photo(1, "a"), photo(2, "b")]));
        assert!(actions.is_empty());
        assert_eq!(controller.phase(), Phase::Ready);
        assert_eq!(controller.photos().len(), 2);
        assert!(controller.can_mutate());
    }

    #[test]
    fn test_photos_loaded_drops_duplicate_ids() {
        let mut controller = signed_in();
        let _ = controller.photos_loaded(Ok(vec![
            photo(1, "first"),
            photo(2, "other"),
            photo(1, "stale"),
        ]));
        let titles: Vec<&str> = controller
            .photos()
            .iter()
            .map(|p| p.title.as_str())
            .collect();
        assert_eq!(titles, vec!["first", "other"]);
    }

    #[test]
    fn test_stale_photo_list_after_logout_is_dropped() {
        let mut controller = signed_in();
        let _ = controller.logout();
        let actions = controller.photos_loaded(Ok(vec![photo(1, "late")]));
        assert!(actions.is_empty());
        assert_eq!(controller.phase(), Phase::Unauthenticated);
        assert!(controller.photos().is_empty());
    }

    #[test]
    fn test_unauthorized_resets_session_from_every_operation() {
        let run = |apply: fn(&mut GalleryController) -> Vec<Action>| {
            let mut controller = ready();
            let _ = controller.photos_loaded(Ok(vec![photo(1, "a")]));
            let actions = apply(&mut controller);
            assert_eq!(actions, vec![Action::ClearSession]);
            assert_eq!(controller.phase(), Phase::Unauthenticated);
            assert!(!controller.session().is_authenticated());
            assert!(controller.photos().is_empty());
            assert_eq!(
                controller.toast().unwrap().message,
                "Session expired. Please log in again."
            );
        };
        run(|c| c.photos_loaded(Err(ApiFailure::Unauthorized)));
        run(|c| c.upload_finished(Err(ApiFailure::Unauthorized)));
        run(|c| c.delete_finished(&PhotoId::from(1), Err(ApiFailure::Unauthorized)));
    }

    #[test]
    fn test_begin_upload_rejects_invalid_draft() {
        let mut controller = ready();
        let payload = controller.begin_upload(&UploadDraft::default());
        assert!(payload.is_none());
        assert_eq!(controller.phase(), Phase::Ready);
        assert_eq!(
            controller.toast().unwrap().message,
            "Please select a photo to upload."
        );
    }

    #[test]
    fn test_begin_upload_requires_ready_phase() {
        let mut controller = signed_in();
        assert!(controller.begin_upload(&valid_draft()).is_none());
        assert_eq!(controller.phase(), Phase::LoadingPhotos);
    }

    #[test]
    fn test_begin_upload_blocked_while_offline() {
        let mut controller = ready();
        let _ = controller.photos_loaded(Err(ApiFailure::Offline {
            message: "timed out".to_owned(),
        }));
        assert!(!controller.can_mutate());
        assert!(controller.begin_upload(&valid_draft()).is_none());
    }

    #[test]
    fn test_begin_upload_enters_uploading() {
        let mut controller = ready();
        let payload = controller.begin_upload(&valid_draft()).unwrap();
        assert_eq!(payload.title, "Sunset");
        assert_eq!(controller.phase(), Phase::Uploading);
        assert!(controller.begin_upload(&valid_draft()).is_none());
    }

    #[test]
    fn test_upload_success_prepends_exactly_one() {
        let mut controller = signed_in();
        let _ = controller.photos_loaded(Ok(vec![photo(1, "old")]));
        let _ = controller.upload_finished(Ok(photo(2, "new")));
        assert_eq!(controller.phase(), Phase::Ready);
        let titles: Vec<&str> = controller
            .photos()
            .iter()
            .map(|p| p.title.as_str())
            .collect();
        assert_eq!(titles, vec!["new", "old"]);
        assert_eq!(controller.toast().unwrap().status, ToastStatus::Success);
    }

    #[test]
    fn test_upload_replaces_stale_entry_with_same_id() {
        let mut controller = signed_in();
        let _ = controller.photos_loaded(Ok(vec![photo(1, "stale"), photo(2, "other")]));
        let _ = controller.upload_finished(Ok(photo(1, "fresh")));
        let titles: Vec<&str> = controller
            .photos()
            .iter()
            .map(|p| p.title.as_str())
            .collect();
        assert_eq!(titles, vec!["fresh", "other"]);
    }

    #[test]
    fn test_upload_failure_keeps_list_unchanged() {
        let mut controller = signed_in();
        let _ = controller.photos_loaded(Ok(vec![photo(1, "kept")]));
        let _ = controller.begin_upload(&valid_draft());
        let _ = controller.upload_finished(Err(ApiFailure::Rejected {
            message: "Image file is corrupt.".to_owned(),
        }));
        assert_eq!(controller.phase(), Phase::Ready);
        assert_eq!(controller.photos().len(), 1);
        assert!(controller.backend_online());
        assert_eq!(controller.toast().unwrap().message, "Image file is corrupt.");
    }

    #[test]
    fn test_upload_offline_flags_backend() {
        let mut controller = ready();
        let _ = controller.begin_upload(&valid_draft());
        let _ = controller.upload_finished(Err(ApiFailure::Offline {
            message: "connection reset".to_owned(),
        }));
        assert_eq!(controller.phase(), Phase::Ready);
        assert!(!controller.backend_online());
        assert_eq!(
            controller.toast().unwrap().message,
            "Upload failed. Confirm the backend is running."
        );
    }

    #[test]
    fn test_delete_removes_only_the_matching_id() {
        let mut controller = signed_in();
        let _ = controller.photos_loaded(Ok(vec![photo(1, "a"), photo(2, "b")]));
        let _ = controller.delete_finished(&PhotoId::from(1), Ok(()));
        let titles: Vec<&str> = controller
            .photos()
            .iter()
            .map(|p| p.title.as_str())
            .collect();
        assert_eq!(titles, vec!["b"]);
        assert_eq!(controller.toast().unwrap().status, ToastStatus::Info);
    }

    #[test]
    fn test_delete_offline_keeps_the_record() {
        let mut controller = signed_in();
        let _ = controller.photos_loaded(Ok(vec![photo(1, "a")]));
        let _ = controller.delete_finished(
            &PhotoId::from(1),
            Err(ApiFailure::Offline {
                message: "dns failure".to_owned(),
            }),
        );
        assert_eq!(controller.photos().len(), 1);
        assert!(!controller.backend_online());
        assert_eq!(
            controller.toast().unwrap().message,
            "Unable to delete. Check the backend connection."
        );
    }

    #[test]
    fn test_logout_clears_everything() {
        let mut controller = signed_in();
        let _ = controller.photos_loaded(Ok(vec![photo(1, "a")]));
        let actions = controller.logout();
        assert_eq!(
            actions,
            vec![
                Action::PostLogout {
                    token: "abc".to_owned()
                },
                Action::ClearSession,
            ]
        );
        assert_eq!(controller.phase(), Phase::Unauthenticated);
        assert!(controller.photos().is_empty());
        assert!(!controller.session().is_authenticated());
        assert_eq!(controller.toast().unwrap().status, ToastStatus::Info);
        assert_eq!(controller.toast().unwrap().message, "You have been logged out.");
    }

    #[test]
    fn test_logout_without_token_skips_the_backend_notice() {
        let mut controller = GalleryController::new();
        let actions = controller.logout();
        assert_eq!(actions, vec![Action::ClearSession]);
    }

    #[test]
    fn test_retry_refetches_photos() {
        let mut controller = ready();
        let _ = controller.photos_loaded(Err(ApiFailure::Offline {
            message: "timed out".to_owned(),
        }));
        let actions = controller.retry();
        assert_eq!(controller.phase(), Phase::LoadingPhotos);
        assert_eq!(
            actions,
            vec![Action::LoadPhotos {
                token: "abc".to_owned()
            }]
        );
    }

    #[test]
    fn test_retry_when_signed_out_is_a_noop() {
        let mut controller = GalleryController::new();
        assert!(controller.retry().is_empty());
        assert_eq!(controller.phase(), Phase::Unauthenticated);
    }

    #[test]
    fn test_toast_expiry_is_sequence_guarded() {
        let mut controller = GalleryController::new();
        controller.report_error("first");
        let stale_seq = controller.toast_seq();
        controller.report_error("second");
        controller.toast_expired(stale_seq);
        assert_eq!(controller.toast().unwrap().message, "second");
        controller.toast_expired(controller.toast_seq());
        assert!(controller.toast().is_none());
    }

    #[test]
    fn test_successful_call_restores_online_flag() {
        let mut controller = ready();
        let _ = controller.photos_loaded(Err(ApiFailure::Offline {
            message: "timed out".to_owned(),
        }));
        assert!(!controller.backend_online());
        let _ = controller.retry();
        let _ = controller.photos_loaded(Ok(Vec::new()));
        assert!(controller.backend_online());
    }

    #[test]
    fn test_full_admin_flow() {
        let mut controller = GalleryController::new();

        let actions = controller.login_finished(Ok(admin_session()));
        assert_eq!(actions.len(), 2);
        assert_eq!(controller.phase(), Phase::LoadingPhotos);

        let _ = controller.photos_loaded(Ok(Vec::new()));
        assert_eq!(controller.phase(), Phase::Ready);
        assert!(controller.photos().is_empty());

        let payload = controller.begin_upload(&valid_draft()).unwrap();
        assert_eq!(payload.title, "Sunset");
        assert_eq!(payload.category, "Nature");
        assert_eq!(controller.phase(), Phase::Uploading);

        let _ = controller.upload_finished(Ok(GalleryPhoto {
            id: PhotoId::from(7),
            title: "Sunset".to_owned(),
            category: Some("Nature".to_owned()),
            notes: None,
            image_url: Some("https://cdn.example.com/sunset.png".to_owned()),
            created_at: None,
        }));
        assert_eq!(controller.phase(), Phase::Ready);
        assert_eq!(controller.photos().len(), 1);
        assert_eq!(controller.photos()[0].title, "Sunset");

        let id = controller.photos()[0].id.clone();
        let _ = controller.delete_finished(&id, Ok(()));
        assert!(controller.photos().is_empty());
    }
}
