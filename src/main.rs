// src/main.rs
use std::sync::Arc;

use iced::alignment::Horizontal;
use iced::widget::{button, column, container, image, scrollable, text, Column, Row};
use iced::{
    executor, theme, window, Application, Command, ContentFit, Element, Length, Settings, Theme,
};
use tracing::{error, warn};
use tracing_subscriber::EnvFilter;

use sheet_attach::attachment_handler::AttachmentHandler;
use sheet_attach::config::{self, Config};
use sheet_attach::data_types::{DisplayState, RenderedImage, RenderedSpreadsheet, Sheet};
use sheet_attach::error::Result;
use sheet_attach::files::LocalFiles;
use sheet_attach::picker::RfdPicker;
use sheet_attach::session::{Action, Dialog, Session, DISPLAY_FAILURE};
use sheet_attach::spreadsheet_handler::SpreadsheetHandler;
use sheet_attach::ui::{ButtonStyle, ContainerStyle, THEME};

const SURFACE_HEIGHT: f32 = 400.0;
const CELL_WIDTH: f32 = 120.0;

pub fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let (config, warning) = config::load();
    if let Some(warning) = warning {
        warn!("{warning}");
    }

    let size = (config.window_width, config.window_height);
    SheetAttach::run(Settings {
        window: window::Settings {
            size,
            resizable: true,
            ..Default::default()
        },
        ..Settings::with_flags(config)
    })
}

struct SheetAttach {
    session: Session,
    spreadsheets: SpreadsheetHandler,
    attachments: AttachmentHandler,
    image_handle: Option<image::Handle>,
    dialog: Option<Dialog>,
}

#[derive(Debug, Clone)]
enum Message {
    Trigger(Action),
    SpreadsheetImported(Result<RenderedSpreadsheet>),
    AttachmentLoaded(Result<RenderedImage>),
    DismissDialog,
}

impl Application for SheetAttach {
    type Executor = executor::Default;
    type Message = Message;
    type Theme = Theme;
    type Flags = Config;

    fn new(config: Config) -> (Self, Command<Message>) {
        let picker = Arc::new(RfdPicker);
        let files = Arc::new(LocalFiles);

        (
            SheetAttach {
                session: Session::new(config.export_preview_chars),
                spreadsheets: SpreadsheetHandler::new(
                    picker.clone(),
                    files.clone(),
                    config.widget_script_url,
                ),
                attachments: AttachmentHandler::new(picker, files),
                image_handle: None,
                dialog: None,
            },
            Command::none(),
        )
    }

    fn title(&self) -> String {
        String::from("Sheet Attach")
    }

    fn update(&mut self, message: Message) -> Command<Message> {
        match message {
            Message::Trigger(Action::ImportSpreadsheet) => {
                let handler = self.spreadsheets.clone();
                Command::perform(
                    async move { handler.import().await },
                    Message::SpreadsheetImported,
                )
            }

            Message::Trigger(Action::AddAttachment) => {
                let handler = self.attachments.clone();
                Command::perform(async move { handler.load().await }, Message::AttachmentLoaded)
            }

            Message::Trigger(Action::ExportSpreadsheet) => {
                self.dialog = Some(self.session.export_dialog());
                Command::none()
            }

            Message::SpreadsheetImported(outcome) => {
                let dialog = self.session.complete_import(outcome);
                self.finish(dialog);
                Command::none()
            }

            Message::AttachmentLoaded(outcome) => {
                let dialog = self.session.complete_attachment(outcome);
                self.finish(dialog);
                Command::none()
            }

            Message::DismissDialog => {
                self.dialog = None;
                Command::none()
            }
        }
    }

    fn view(&self) -> Element<Message> {
        if let Some(dialog) = &self.dialog {
            return self.dialog_view(dialog);
        }

        let surface = match self.session.display() {
            DisplayState::Spreadsheet(spreadsheet) => self.render_table(&spreadsheet.sheet),
            DisplayState::Image(_) => match &self.image_handle {
                Some(handle) => image(handle.clone())
                    .width(Length::Fill)
                    .height(Length::Fixed(SURFACE_HEIGHT))
                    .content_fit(ContentFit::Contain)
                    .into(),
                None => prompt_view(DISPLAY_FAILURE),
            },
            DisplayState::Empty => prompt_view(self.session.prompt().unwrap_or_default()),
        };

        let buttons = Column::with_children(Action::ALL.into_iter().map(action_button).collect())
            .spacing(10);

        let content = column![
            container(surface).width(Length::Fill).height(Length::Fill),
            buttons
        ]
        .spacing(10)
        .padding(10);

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(theme::Container::Custom(Box::new(ContainerStyle::filled(
                THEME.bg,
            ))))
            .into()
    }
}

impl SheetAttach {
    /// Applies the dialog of a finished action and refreshes the image
    /// widget from the display state.
    fn finish(&mut self, dialog: Option<Dialog>) {
        if dialog.is_some() {
            self.dialog = dialog;
        }

        self.image_handle = None;
        if let Some(picture) = self.session.display().image() {
            match picture.payload_bytes() {
                Ok(bytes) => self.image_handle = Some(image::Handle::from_memory(bytes)),
                Err(err) => {
                    error!(error = %err, "attachment cannot be displayed");
                    self.dialog = Some(Dialog::display_failure());
                }
            }
        }
    }

    fn render_table(&self, sheet: &Sheet) -> Element<Message> {
        let rows: Vec<Element<Message>> = sheet
            .rows
            .iter()
            .enumerate()
            .map(|(r, cells)| {
                let is_header = r == 0;
                let (bg, fg) = if is_header {
                    (THEME.header_bg, THEME.header_fg)
                } else {
                    (THEME.cell_bg, THEME.fg)
                };

                Row::with_children(
                    cells
                        .iter()
                        .map(|cell| {
                            container(text(cell).size(16).style(fg))
                                .width(Length::Fixed(CELL_WIDTH))
                                .padding(8)
                                .center_x()
                                .style(theme::Container::Custom(Box::new(ContainerStyle::cell(
                                    bg, THEME.grid,
                                ))))
                                .into()
                        })
                        .collect(),
                )
                .into()
            })
            .collect();

        scrollable(Column::with_children(rows))
            .height(Length::Fill)
            .into()
    }

    fn dialog_view(&self, dialog: &Dialog) -> Element<Message> {
        let body = column![
            text(&dialog.title).size(22).style(THEME.fg),
            container(scrollable(text(&dialog.body).size(16).style(THEME.fg))).max_height(320.0),
            button(
                text("OK")
                    .size(16)
                    .width(Length::Fill)
                    .horizontal_alignment(Horizontal::Center)
            )
            .on_press(Message::DismissDialog)
            .width(Length::Fixed(100.0))
            .padding(10)
            .style(theme::Button::Custom(Box::new(ButtonStyle::primary()))),
        ]
        .spacing(16)
        .padding(20)
        .width(Length::Fixed(400.0));

        let card = container(body).style(theme::Container::Custom(Box::new(
            ContainerStyle::filled(THEME.dialog_bg),
        )));

        container(card)
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x()
            .center_y()
            .style(theme::Container::Custom(Box::new(ContainerStyle::filled(
                THEME.bg,
            ))))
            .into()
    }
}

fn prompt_view(prompt: &str) -> Element<'static, Message> {
    container(
        text(prompt)
            .size(18)
            .style(THEME.prompt_fg)
            .horizontal_alignment(Horizontal::Center),
    )
    .width(Length::Fill)
    .height(Length::Fixed(SURFACE_HEIGHT))
    .center_x()
    .center_y()
    .into()
}

fn action_button(action: Action) -> Element<'static, Message> {
    button(
        text(action.label())
            .size(16)
            .width(Length::Fill)
            .horizontal_alignment(Horizontal::Center),
    )
    .on_press(Message::Trigger(action))
    .width(Length::Fill)
    .padding([10, 20])
    .style(theme::Button::Custom(Box::new(ButtonStyle::primary())))
    .into()
}
