//! `GalleryDesk` - Desktop admin console for a remote portfolio gallery
//!
//! Built with Rust, the iced GUI framework, and a typed client for the
//! gallery backend.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod message;
mod model;
mod style;
mod view;

use iced::keyboard::{self, Key, Modifiers};
use iced::widget::{column, container, image, scrollable};
use iced::{Element, Length, Subscription, Task};
use tracing::{debug, error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use std::collections::{HashMap, HashSet};

use bytes::Bytes;
use gallerydesk_api::{ApiConfig, GalleryClient, GalleryPhoto, NewPhoto, PhotoId, cache_busted};
use gallerydesk_core::{
    Action, ApiFailure, GalleryController, Phase, Session, SessionStore, TOAST_TTL,
    content_type_for,
};

use message::{KeyboardAction, LoginMessage, Message, UploadMessage};
use model::{LoginForm, PickedImage, ThumbnailState, UploadForm};

fn main() -> iced::Result {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gallerydesk=debug,info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match ApiConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            error!(%err, "invalid backend address");
            std::process::exit(1);
        }
    };

    info!(base = config.api_base(), "Starting GalleryDesk");

    iced::application(
        move || GalleryDesk::new(config.clone()),
        GalleryDesk::update,
        GalleryDesk::view,
    )
    .title("GalleryDesk")
    .subscription(GalleryDesk::subscription)
    .run()
}

/// Main application state.
struct GalleryDesk {
    /// HTTP client for the gallery backend.
    client: GalleryClient,
    /// On-disk session persistence.
    store: SessionStore,
    /// Session, photo list and backend status.
    controller: GalleryController,
    /// Sign-in form.
    login: LoginForm,
    /// Upload form.
    upload: UploadForm,
    /// Search query, matched against title, category and notes.
    search_query: String,
    /// Thumbnail state per photo.
    thumbnails: HashMap<PhotoId, ThumbnailState>,
    /// Photo awaiting delete confirmation.
    pending_delete: Option<PhotoId>,
    /// Photo with a delete request on the wire.
    deleting: Option<PhotoId>,
    /// Toast sequence number with an armed expiry timer.
    armed_toast: u64,
}

impl GalleryDesk {
    /// Create new application instance.
    fn new(config: ApiConfig) -> (Self, Task<Message>) {
        let app = Self {
            client: GalleryClient::new(config),
            store: SessionStore::open_default(),
            controller: GalleryController::new(),
            login: LoginForm::default(),
            upload: UploadForm::default(),
            search_query: String::new(),
            thumbnails: HashMap::new(),
            pending_delete: None,
            deleting: None,
            armed_toast: 0,
        };
        let restore = Task::perform(load_session(app.store.clone()), Message::SessionRestored);
        (app, restore)
    }

    /// Update state based on message.
    #[allow(clippy::needless_pass_by_value)]
    fn update(&mut self, message: Message) -> Task<Message> {
        let task = self.handle(message);
        // One timer per toast; re-arming is keyed on the sequence number
        Task::batch([task, self.arm_toast_timer()])
    }

    /// Dispatch one message against the controller and forms.
    #[allow(clippy::too_many_lines)] // Large match is idiomatic for Elm architecture
    fn handle(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::SessionRestored(session) => {
                let actions = self.controller.restore_session(session);
                self.run_actions(actions)
            }
            Message::Login(msg) => self.handle_login(msg),
            Message::LoginFinished(outcome) => {
                self.login.in_flight = false;
                if outcome.is_ok() {
                    self.login = LoginForm::default();
                } else {
                    self.login.password.clear();
                }
                let actions = self.controller.login_finished(outcome);
                self.run_actions(actions)
            }
            Message::PhotosLoaded(outcome) => {
                let actions = self.controller.photos_loaded(outcome);
                self.prune_thumbnails();
                let fetches = self.spawn_thumbnail_fetches();
                Task::batch([self.run_actions(actions), fetches])
            }
            Message::SearchChanged(query) => {
                self.search_query = query;
                Task::none()
            }
            Message::RetryConnection => {
                let actions = self.controller.retry();
                self.run_actions(actions)
            }
            Message::ThumbnailLoaded(id, outcome) => {
                match outcome {
                    Ok(handle) => {
                        self.thumbnails.insert(id, ThumbnailState::Ready(handle));
                    }
                    Err(err) => {
                        debug!(photo = %id, %err, "thumbnail fetch failed");
                        self.thumbnails.insert(id, ThumbnailState::Failed);
                    }
                }
                Task::none()
            }
            Message::OpenImage(url) => {
                if let Err(err) = opener::open(&url) {
                    warn!(%err, "could not open the browser");
                    self.controller
                        .report_error("Could not open the image in a browser.");
                }
                Task::none()
            }
            Message::Upload(msg) => self.handle_upload(msg),
            Message::ImagePicked(outcome) => {
                match outcome {
                    Ok(Some(picked)) => self.upload.attach(picked),
                    Ok(None) => {}
                    Err(err) => {
                        warn!(%err, "picked file was unreadable");
                        self.controller
                            .report_error("Could not read the selected file.");
                    }
                }
                Task::none()
            }
            Message::UploadFinished(outcome) => {
                let mut fetch = Task::none();
                if let Ok(photo) = &outcome {
                    self.upload.clear();
                    if let Some(url) = photo.image_url.as_deref() {
                        // Bust any stale cached copy of a replaced image
                        self.thumbnails
                            .insert(photo.id.clone(), ThumbnailState::Loading);
                        fetch = Task::perform(
                            fetch_thumbnail(
                                self.client.clone(),
                                photo.id.clone(),
                                cache_busted(url),
                            ),
                            |(id, outcome)| Message::ThumbnailLoaded(id, outcome),
                        );
                    }
                }
                let actions = self.controller.upload_finished(outcome);
                Task::batch([self.run_actions(actions), fetch])
            }
            Message::RequestDelete(id) => {
                if self.controller.can_mutate() && self.deleting.is_none() {
                    self.pending_delete = Some(id);
                }
                Task::none()
            }
            Message::CancelDelete => {
                self.pending_delete = None;
                Task::none()
            }
            Message::ConfirmDelete(id) => {
                self.pending_delete = None;
                if !self.controller.can_mutate() {
                    return Task::none();
                }
                self.deleting = Some(id.clone());
                let token = self.controller.session().token.clone();
                Task::perform(
                    delete_photo(self.client.clone(), token, id),
                    |(id, outcome)| Message::DeleteFinished(id, outcome),
                )
            }
            Message::DeleteFinished(id, outcome) => {
                self.deleting = None;
                let actions = self.controller.delete_finished(&id, outcome);
                self.prune_thumbnails();
                self.run_actions(actions)
            }
            Message::Logout => {
                self.login = LoginForm::default();
                self.upload = UploadForm::default();
                self.search_query.clear();
                self.thumbnails.clear();
                self.pending_delete = None;
                self.deleting = None;
                let actions = self.controller.logout();
                self.run_actions(actions)
            }
            Message::LogoutPosted => Task::none(),
            Message::SessionSaved(outcome) => {
                if let Err(err) = outcome {
                    warn!(%err, "session was not persisted");
                }
                Task::none()
            }
            Message::SessionCleared(outcome) => {
                if let Err(err) = outcome {
                    warn!(%err, "stored session was not removed");
                }
                Task::none()
            }
            Message::ToastExpired(seq) => {
                self.controller.toast_expired(seq);
                Task::none()
            }
            Message::ToastDismissed => {
                self.controller.dismiss_toast();
                Task::none()
            }
            Message::KeyPressed(action) => self.handle_key(action),
            Message::KeyboardIgnored => Task::none(),
        }
    }

    /// Handle login form messages.
    fn handle_login(&mut self, msg: LoginMessage) -> Task<Message> {
        match msg {
            LoginMessage::UsernameChanged(value) => {
                self.login.username = value;
                Task::none()
            }
            LoginMessage::PasswordChanged(value) => {
                self.login.password = value;
                Task::none()
            }
            LoginMessage::Submit => {
                if !self.login.can_submit() {
                    return Task::none();
                }
                self.login.in_flight = true;
                let username = self.login.username.clone();
                let password = self.login.password.clone();
                Task::perform(
                    sign_in(self.client.clone(), username, password),
                    Message::LoginFinished,
                )
            }
        }
    }

    /// Handle upload form messages.
    fn handle_upload(&mut self, msg: UploadMessage) -> Task<Message> {
        match msg {
            UploadMessage::TitleChanged(value) => {
                self.upload.draft.title = value;
                Task::none()
            }
            UploadMessage::CategoryChanged(value) => {
                self.upload.draft.category = value;
                Task::none()
            }
            UploadMessage::NotesChanged(value) => {
                self.upload.draft.notes = value;
                Task::none()
            }
            UploadMessage::PickImage => Task::perform(pick_image(), Message::ImagePicked),
            UploadMessage::ClearImage => {
                self.upload.detach();
                Task::none()
            }
            UploadMessage::Submit => {
                let Some(photo) = self.controller.begin_upload(&self.upload.draft) else {
                    return Task::none();
                };
                let token = self.controller.session().token.clone();
                Task::perform(
                    upload_photo(self.client.clone(), token, photo),
                    Message::UploadFinished,
                )
            }
        }
    }

    /// Handle keyboard shortcut actions.
    fn handle_key(&mut self, action: KeyboardAction) -> Task<Message> {
        match action {
            KeyboardAction::Cancel => {
                if self.pending_delete.is_some() {
                    self.pending_delete = None;
                } else {
                    self.controller.dismiss_toast();
                }
                Task::none()
            }
            KeyboardAction::Refresh => {
                if self.controller.phase() == Phase::Ready {
                    let actions = self.controller.retry();
                    return self.run_actions(actions);
                }
                Task::none()
            }
        }
    }

    /// Turn controller follow-ups into async tasks.
    fn run_actions(&mut self, actions: Vec<Action>) -> Task<Message> {
        let mut tasks = Vec::with_capacity(actions.len());
        for action in actions {
            match action {
                Action::PersistSession(session) => tasks.push(Task::perform(
                    save_session(self.store.clone(), session),
                    Message::SessionSaved,
                )),
                Action::ClearSession => tasks.push(Task::perform(
                    clear_session(self.store.clone()),
                    Message::SessionCleared,
                )),
                Action::LoadPhotos { token } => tasks.push(Task::perform(
                    load_photos(self.client.clone(), token),
                    Message::PhotosLoaded,
                )),
                Action::PostLogout { token } => tasks.push(Task::perform(
                    post_logout(self.client.clone(), token),
                    |()| Message::LogoutPosted,
                )),
            }
        }
        Task::batch(tasks)
    }

    /// Arm a single expiry timer for a freshly shown toast.
    fn arm_toast_timer(&mut self) -> Task<Message> {
        let seq = self.controller.toast_seq();
        if self.controller.toast().is_none() || self.armed_toast == seq {
            return Task::none();
        }
        self.armed_toast = seq;
        Task::perform(toast_delay(seq), Message::ToastExpired)
    }

    /// Start fetches for photos that have no thumbnail yet.
    fn spawn_thumbnail_fetches(&mut self) -> Task<Message> {
        let mut tasks = Vec::new();
        for photo in self.controller.photos() {
            let Some(url) = photo.image_url.as_deref() else {
                continue;
            };
            if self.thumbnails.contains_key(&photo.id) {
                continue;
            }
            self.thumbnails
                .insert(photo.id.clone(), ThumbnailState::Loading);
            tasks.push(Task::perform(
                fetch_thumbnail(self.client.clone(), photo.id.clone(), url.to_string()),
                |(id, outcome)| Message::ThumbnailLoaded(id, outcome),
            ));
        }
        Task::batch(tasks)
    }

    /// Drop thumbnails for photos that left the list.
    fn prune_thumbnails(&mut self) {
        let keep: HashSet<PhotoId> = self
            .controller
            .photos()
            .iter()
            .map(|photo| photo.id.clone())
            .collect();
        self.thumbnails.retain(|id, _| keep.contains(id));
    }

    /// Photos passing the search filter, newest first.
    fn visible_photos(&self) -> Vec<&GalleryPhoto> {
        let query = self.search_query.trim().to_lowercase();
        self.controller
            .photos()
            .iter()
            .filter(|photo| {
                if query.is_empty() {
                    return true;
                }
                photo.title.to_lowercase().contains(&query)
                    || photo
                        .category
                        .as_deref()
                        .is_some_and(|category| category.to_lowercase().contains(&query))
                    || photo
                        .notes
                        .as_deref()
                        .is_some_and(|notes| notes.to_lowercase().contains(&query))
            })
            .collect()
    }

    /// Render current state as UI.
    fn view(&self) -> Element<'_, Message> {
        let screen = if self.controller.phase().is_authenticated() {
            self.view_gallery()
        } else {
            view::view_login(&self.login)
        };

        let mut layout = column![container(screen).height(Length::Fill)];
        if let Some(toast) = self.controller.toast() {
            layout = layout.push(view::view_toast(toast));
        }
        layout.width(Length::Fill).height(Length::Fill).into()
    }

    /// Signed-in layout: header, status banner, upload card and grid.
    fn view_gallery(&self) -> Element<'_, Message> {
        let controller = &self.controller;

        let header = view::view_header(
            controller.session().username(),
            &self.search_query,
            controller.photos().len(),
        );

        let visible = self.visible_photos();
        let is_filtered = !self.search_query.trim().is_empty();

        let content = column![
            view::view_upload_card(
                &self.upload,
                controller.phase() == Phase::Uploading,
                controller.can_mutate(),
            ),
            view::view_photo_grid(
                &visible,
                &self.thumbnails,
                self.pending_delete.as_ref(),
                self.deleting.as_ref(),
                controller.can_mutate(),
                controller.phase() == Phase::LoadingPhotos,
                is_filtered,
            ),
        ]
        .spacing(20)
        .padding(24)
        .max_width(1080);

        let mut body = column![header];
        if !controller.backend_online() {
            body = body.push(view::view_offline_banner());
        }
        body = body.push(
            scrollable(container(content).center_x(Length::Fill))
                .height(Length::Fill)
                .style(style::widgets::scrollable_style),
        );

        container(body)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(|_theme| {
                let p = style::widgets::palette::current();
                container::Style {
                    background: Some(iced::Background::Color(p.background)),
                    ..Default::default()
                }
            })
            .into()
    }

    /// Subscribe to keyboard events for shortcuts.
    #[allow(clippy::unused_self)] // Required signature for iced subscription
    fn subscription(&self) -> Subscription<Message> {
        keyboard::listen().map(|event| {
            if let keyboard::Event::KeyPressed { key, modifiers, .. } = event {
                handle_key_press(key, modifiers).unwrap_or(Message::KeyboardIgnored)
            } else {
                Message::KeyboardIgnored // Ignore other keyboard events
            }
        })
    }
}

/// Handle keyboard shortcuts and return appropriate message.
fn handle_key_press(key: Key, _modifiers: Modifiers) -> Option<Message> {
    match key {
        // Escape: close the delete prompt or dismiss the toast
        Key::Named(keyboard::key::Named::Escape) => {
            Some(Message::KeyPressed(KeyboardAction::Cancel))
        }
        // F5: refresh the photo list
        Key::Named(keyboard::key::Named::F5) => Some(Message::KeyPressed(KeyboardAction::Refresh)),
        _ => None,
    }
}

/// Read the stored session, anonymous when absent.
async fn load_session(store: SessionStore) -> Session {
    store.load().await
}

/// Persist a session after sign-in.
async fn save_session(store: SessionStore, session: Session) -> Result<(), String> {
    store.save(&session).await.map_err(|err| err.to_string())
}

/// Remove the stored session.
async fn clear_session(store: SessionStore) -> Result<(), String> {
    store.clear().await.map_err(|err| err.to_string())
}

/// Exchange credentials for an authenticated session.
async fn sign_in(
    client: GalleryClient,
    username: String,
    password: String,
) -> Result<Session, ApiFailure> {
    let login = client.login(&username, &password).await?;
    Ok(Session::authenticated(login.token, login.user))
}

/// Fetch and normalize the photo listing.
async fn load_photos(
    client: GalleryClient,
    token: String,
) -> Result<Vec<GalleryPhoto>, ApiFailure> {
    let photos = client.list_photos(&token).await?;
    Ok(photos
        .into_iter()
        .map(|photo| photo.normalize(client.config()))
        .collect())
}

/// Send a new photo to the backend.
async fn upload_photo(
    client: GalleryClient,
    token: String,
    photo: NewPhoto,
) -> Result<GalleryPhoto, ApiFailure> {
    let stored = client.upload_photo(&token, photo).await?;
    Ok(stored.normalize(client.config()))
}

/// Delete one photo, carrying its id back with the outcome.
async fn delete_photo(
    client: GalleryClient,
    token: String,
    id: PhotoId,
) -> (PhotoId, Result<(), ApiFailure>) {
    let outcome = client
        .delete_photo(&token, &id)
        .await
        .map_err(ApiFailure::from);
    (id, outcome)
}

/// Best-effort logout notice; failures are logged and dropped.
async fn post_logout(client: GalleryClient, token: String) {
    if let Err(err) = client.logout(&token).await {
        debug!(%err, "logout notice failed");
    }
}

/// Fetch one thumbnail and decode it into an image handle.
async fn fetch_thumbnail(
    client: GalleryClient,
    id: PhotoId,
    url: String,
) -> (PhotoId, Result<image::Handle, ApiFailure>) {
    let outcome = client
        .fetch_image(&url)
        .await
        .map(image::Handle::from_bytes)
        .map_err(ApiFailure::from);
    (id, outcome)
}

/// Pause before expiring the toast with the given sequence number.
async fn toast_delay(seq: u64) -> u64 {
    tokio::time::sleep(TOAST_TTL).await;
    seq
}

/// Ask for an image file and read it off disk.
async fn pick_image() -> Result<Option<PickedImage>, String> {
    let Some(file) = rfd::AsyncFileDialog::new()
        .set_title("Choose a photo")
        .add_filter("Images", &["jpg", "jpeg", "png", "webp", "gif"])
        .pick_file()
        .await
    else {
        return Ok(None);
    };

    let path = file.path().to_path_buf();
    let bytes = tokio::fs::read(&path)
        .await
        .map_err(|err| err.to_string())?;
    let content_type = content_type_for(&path).map(str::to_owned);

    Ok(Some(PickedImage {
        name: file.file_name(),
        content_type,
        bytes: Bytes::from(bytes),
    }))
}
