use iced::widget::{button, column, container, scrollable, text};
use iced::{Alignment, Element, Length, Task, Theme};
use iced_aw::Wrap;
use rfd::FileDialog;
use std::collections::HashSet;
use std::path::PathBuf;

mod state;
mod ui;

use state::catalog::{load_catalog, Catalog, LoadError};
use state::filter::{self, Selection};

/// Main application state
struct CatalogApp {
    /// The loaded catalog, None until the startup load finishes (or after
    /// it fails)
    catalog: Option<Catalog>,
    /// The active category/tag filters
    selection: Selection,
    /// Ids of communities whose details region is open
    expanded_cards: HashSet<String>,
    /// Whether the collapsed remainder of the tag bar is shown
    tags_expanded: bool,
    /// Status message to display to the user
    status: String,
    /// Where the three dataset files live
    data_dir: PathBuf,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    /// Startup (or re-triggered) load finished
    CatalogLoaded(Result<Catalog, LoadError>),
    /// Filter-bar category button; None means "All"
    CategoryClicked(Option<String>),
    /// Filter-bar tag button; None means "All"
    TagClicked(Option<String>),
    /// Tag chip inside a card (toggle semantics)
    TagChipPressed(String),
    /// Summary row of a card was clicked
    ToggleDetails(String),
    /// "+N more" / "show less" disclosure in the tag bar
    ToggleMoreTags,
    /// Platform link button inside a card
    OpenLink(String),
    /// User clicked the "Open Data Folder…" button
    PickDataFolder,
}

impl CatalogApp {
    /// Create a new instance of the application and kick off the load
    fn new() -> (Self, Task<Message>) {
        let data_dir = default_data_dir();
        println!("📁 Data directory: {}", data_dir.display());

        let status = format!("Loading catalog from {}…", data_dir.display());

        (
            CatalogApp {
                catalog: None,
                selection: Selection::default(),
                expanded_cards: HashSet::new(),
                tags_expanded: false,
                status,
                data_dir: data_dir.clone(),
            },
            Task::perform(load_catalog(data_dir), Message::CatalogLoaded),
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::CatalogLoaded(Ok(catalog)) => {
                println!(
                    "🗂️ Catalog ready with {} communities",
                    catalog.communities.len()
                );
                self.status = format!("Ready. {} communities in catalog.", catalog.communities.len());
                self.selection = Selection::default();
                self.expanded_cards.clear();
                self.tags_expanded = false;
                self.catalog = Some(catalog);
                Task::none()
            }
            Message::CatalogLoaded(Err(error)) => {
                eprintln!("⚠️  Catalog load failed: {}", error);
                self.status = format!("⚠️ {}", error);
                self.catalog = None;
                Task::none()
            }
            Message::CategoryClicked(id) => {
                self.selection.select_category(id);
                Task::none()
            }
            Message::TagClicked(id) => {
                self.selection.select_tag(id);
                Task::none()
            }
            Message::TagChipPressed(id) => {
                self.selection.toggle_tag(&id);
                Task::none()
            }
            Message::ToggleDetails(id) => {
                if !self.expanded_cards.remove(&id) {
                    self.expanded_cards.insert(id);
                }
                Task::none()
            }
            Message::ToggleMoreTags => {
                self.tags_expanded = !self.tags_expanded;
                Task::none()
            }
            Message::OpenLink(url) => {
                if let Err(e) = open::that(&url) {
                    eprintln!("⚠️  Could not open {}: {}", url, e);
                }
                Task::none()
            }
            Message::PickDataFolder => {
                // Show the native folder picker dialog
                let folder = FileDialog::new()
                    .set_title("Select Catalog Data Folder")
                    .pick_folder();

                if let Some(folder_path) = folder {
                    self.status = format!("Loading catalog from {}…", folder_path.display());
                    self.data_dir = folder_path.clone();

                    return Task::perform(load_catalog(folder_path), Message::CatalogLoaded);
                }

                Task::none()
            }
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let Some(catalog) = &self.catalog else {
            return self.view_without_catalog();
        };

        let visible = filter::visible_communities(&catalog.communities, &self.selection);

        let grid: Element<Message> = if visible.is_empty() {
            text("Nothing matches the current filters.").size(16).into()
        } else {
            let cards: Vec<Element<Message>> = visible
                .into_iter()
                .map(|community| {
                    ui::card::community_card(
                        community,
                        catalog,
                        &self.selection,
                        self.expanded_cards.contains(&community.id),
                    )
                })
                .collect();

            Wrap::with_elements(cards)
                .spacing(12.0)
                .line_spacing(12.0)
                .into()
        };

        column![
            ui::filters::filter_bar(catalog, &self.selection, self.tags_expanded),
            scrollable(grid).height(Length::Fill),
            text(&self.status).size(14),
        ]
        .spacing(16)
        .padding(16)
        .into()
    }

    /// Shown while loading and after a failed load
    fn view_without_catalog(&self) -> Element<Message> {
        let content = column![
            text("Community Catalog").size(32),
            text(&self.status).size(16),
            text(format!("Data directory: {}", self.data_dir.display())).size(13),
            button("Open Data Folder…")
                .on_press(Message::PickDataFolder)
                .padding(10),
        ]
        .spacing(20)
        .padding(40)
        .align_x(Alignment::Center);

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .into()
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

/// Resolve the data directory: a local `data/` folder wins, otherwise the
/// per-user application data directory is used:
/// - Linux: ~/.local/share/community-catalog/data
/// - macOS: ~/Library/Application Support/community-catalog/data
/// - Windows: %APPDATA%\community-catalog\data
fn default_data_dir() -> PathBuf {
    let local = PathBuf::from("data");
    if local.is_dir() {
        return local;
    }

    let mut path = dirs::data_dir()
        .or_else(dirs::home_dir)
        .expect("Could not determine user data directory");

    path.push("community-catalog");
    path.push("data");
    path
}

fn main() -> iced::Result {
    iced::application("Community Catalog", CatalogApp::update, CatalogApp::view)
        .theme(CatalogApp::theme)
        .centered()
        .run_with(CatalogApp::new)
}
