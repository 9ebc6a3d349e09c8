use iced::futures::SinkExt;
use iced::widget::{column, scrollable};
use iced::{stream, Element, Subscription, Task, Theme};
use rfd::FileDialog;

mod settings;
mod source;
mod state;
mod ui;

use settings::DisplaySettings;
use source::SyntheticSource;
use state::catalog::{CatalogEvent, CatalogLoader, FetchError, PageRequest, SCROLL_THRESHOLD};
use state::data::CatalogEntry;
use state::upload::{
    TickOutcome, UploadEvent, UploadPhase, UploadSimulator, PROCESSING_DELAY, TICK_INTERVAL,
};

/// Screens reachable from the navbar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Catalog,
    Upload,
}

/// Main application state
pub struct GalleryDemo {
    /// Paginated catalog state machine
    catalog: CatalogLoader,
    /// Simulated upload state machine
    upload: UploadSimulator,
    /// Synthetic stand-in for a network catalog client
    source: SyntheticSource,
    /// Presentation-only settings (fonts, theme)
    settings: DisplaySettings,
    /// Currently visible screen
    screen: Screen,
    /// Whether the About card replaces the screen body
    show_about: bool,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    /// Navbar tab pressed
    ScreenSelected(Screen),
    /// About button pressed (opens or closes the card)
    ToggleAbout,
    /// Catalog scrollable moved; may trigger the next page
    CatalogScrolled(scrollable::Viewport),
    /// Refresh button pressed
    RefreshCatalog,
    /// Retry button on the error banner pressed
    RetryCatalog,
    /// A page fetch resolved, possibly for a superseded epoch
    PageFetched {
        epoch: u64,
        result: Result<Vec<CatalogEntry>, FetchError>,
    },
    /// "Choose image" button pressed
    PickArtifact,
    /// Upload ticker fired for the given simulation epoch
    UploadTick(u64),
    /// Processing delay elapsed for the given simulation epoch
    ProcessingElapsed(u64),
    /// Font picked in the About card
    FontSelected(String),
    /// Dark mode checkbox toggled
    DarkModeToggled(bool),
}

impl GalleryDemo {
    /// Create a new instance of the application
    fn new() -> (Self, Task<Message>) {
        let mut catalog = CatalogLoader::new();
        let mut upload = UploadSimulator::new();

        // Startup observers: log state changes the way a host shell would
        // react to them.
        catalog.subscribe(|event: &CatalogEvent| match event {
            CatalogEvent::PageLoaded { appended } => {
                println!("📥 Page loaded: {appended} entries appended");
            }
            CatalogEvent::Exhausted => println!("🏁 Catalog exhausted"),
            CatalogEvent::Failed(error) => eprintln!("⚠️  Catalog fetch failed: {error}"),
            CatalogEvent::InitialLoading | CatalogEvent::LoadingMore | CatalogEvent::Cleared => {}
        });
        upload.subscribe(|event: &UploadEvent| match event {
            UploadEvent::Started { artifact } => {
                println!("📤 Upload started: {}", artifact.display());
            }
            UploadEvent::UploadFinished => println!("✅ Upload finished, processing…"),
            UploadEvent::ProcessingFinished => println!("🎉 Processing finished"),
            UploadEvent::Progressed { .. } => {}
        });

        let source = SyntheticSource::new();

        // The first page load happens exactly once per session.
        let task = match catalog.initialize() {
            Some(request) => fetch_task(&source, request),
            None => Task::none(),
        };

        (
            GalleryDemo {
                catalog,
                upload,
                source,
                settings: DisplaySettings::default(),
                screen: Screen::Catalog,
                show_about: false,
            },
            task,
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::ScreenSelected(screen) => {
                self.screen = screen;
                self.show_about = false;
                Task::none()
            }
            Message::ToggleAbout => {
                self.show_about = !self.show_about;
                Task::none()
            }
            Message::CatalogScrolled(viewport) => {
                // Proximity trigger: ask for the next page once the bottom
                // of the viewport comes within the threshold of the content
                // end. The loader's guard absorbs the repeat calls this
                // fires on every scroll event.
                let bottom = viewport.absolute_offset().y + viewport.bounds().height;
                let near_end = bottom >= viewport.content_bounds().height - SCROLL_THRESHOLD;
                if near_end {
                    if let Some(request) = self.catalog.load_more() {
                        return fetch_task(&self.source, request);
                    }
                }
                Task::none()
            }
            Message::RefreshCatalog => {
                let request = self.catalog.refresh();
                fetch_task(&self.source, request)
            }
            Message::RetryCatalog => match self.catalog.load_more() {
                Some(request) => fetch_task(&self.source, request),
                None => Task::none(),
            },
            Message::PageFetched { epoch, result } => {
                // Stale epochs are dropped inside the loader.
                self.catalog.resolve(epoch, result);
                Task::none()
            }
            Message::PickArtifact => {
                let picked = FileDialog::new()
                    .set_title("Select an Image to Upload")
                    .add_filter("Images", &["png", "jpg", "jpeg", "gif", "webp", "bmp"])
                    .pick_file();

                // A cancelled dialog leaves the simulator untouched; a pick
                // bumps the epoch, which invalidates any ticker or delay
                // still pending for a previous artifact.
                self.upload.select_artifact(picked);
                Task::none()
            }
            Message::UploadTick(epoch) => match self.upload.tick(epoch) {
                TickOutcome::ScheduleProcessing => Task::perform(
                    tokio::time::sleep(PROCESSING_DELAY),
                    move |_| Message::ProcessingElapsed(epoch),
                ),
                TickOutcome::Continue | TickOutcome::Stale => Task::none(),
            },
            Message::ProcessingElapsed(epoch) => {
                self.upload.finish_processing(epoch);
                Task::none()
            }
            Message::FontSelected(name) => {
                self.settings.select_font(&name);
                Task::none()
            }
            Message::DarkModeToggled(dark) => {
                self.settings.dark_mode = dark;
                Task::none()
            }
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let body: Element<Message> = if self.show_about {
            ui::about::about_card(&self.settings)
        } else {
            match self.screen {
                Screen::Catalog => ui::catalog::catalog_screen(&self.catalog),
                Screen::Upload => ui::upload::upload_screen(&self.upload),
            }
        };

        column![ui::navbar::navbar(self.screen, self.show_about), body].into()
    }

    /// The ticker runs only while an upload is in flight. The epoch is both
    /// the subscription id and the stamp on every tick: picking a new
    /// artifact mid-upload changes the id, which tears the old ticker down,
    /// and a tick already sitting in the message queue still carries the
    /// old epoch and is rejected by the simulator.
    fn subscription(&self) -> Subscription<Message> {
        match self.upload.phase() {
            UploadPhase::Uploading => {
                let epoch = self.upload.epoch();
                Subscription::run_with_id(
                    epoch,
                    stream::channel(8, move |mut output| async move {
                        let mut ticker = tokio::time::interval(TICK_INTERVAL);
                        // The first interval tick completes immediately;
                        // skip it so ticks are evenly spaced from the start.
                        ticker.tick().await;
                        loop {
                            ticker.tick().await;
                            if output.send(Message::UploadTick(epoch)).await.is_err() {
                                break;
                            }
                        }
                    }),
                )
            }
            UploadPhase::Idle | UploadPhase::Processing | UploadPhase::Done => Subscription::none(),
        }
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        if self.settings.dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

fn main() -> iced::Result {
    iced::application("Gallery Demo", GalleryDemo::update, GalleryDemo::view)
        .subscription(GalleryDemo::subscription)
        .theme(GalleryDemo::theme)
        .centered()
        .run_with(GalleryDemo::new)
}

/// Spawn the async fetch for a page request. The result message carries the
/// request's epoch so a response that outlives a refresh resolves as stale.
fn fetch_task(source: &SyntheticSource, request: PageRequest) -> Task<Message> {
    let source = source.clone();
    let epoch = request.epoch;
    Task::perform(
        async move { source.fetch_page(request.cursor, request.size).await },
        move |result| Message::PageFetched { epoch, result },
    )
}
