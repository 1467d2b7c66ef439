//! Application shell: routes view messages and dispatches the one async
//! conversion call.

use iced::{executor, widget::column, Application, Command, Element, Settings, Size, Theme};

use crate::conversion::{ConversionRequest, GeminiService};
use crate::ui::views::converter_view::{self, ConverterView};

pub fn run(service: GeminiService) -> iced::Result {
    let mut settings = Settings::with_flags(service);
    settings.window.size = Size::new(1000.0, 680.0);
    CurlToPythonApp::run(settings)
}

pub struct CurlToPythonApp {
    service: GeminiService,
    converter: ConverterView,
}

#[derive(Debug, Clone)]
pub enum Message {
    Converter(converter_view::Message),
}

impl Application for CurlToPythonApp {
    type Executor = executor::Default;
    type Message = Message;
    type Theme = Theme;
    type Flags = GeminiService;

    fn new(service: GeminiService) -> (CurlToPythonApp, Command<Message>) {
        (
            CurlToPythonApp {
                service,
                converter: ConverterView::new(),
            },
            Command::none(),
        )
    }

    fn title(&self) -> String {
        String::from("CurlToPython")
    }

    fn update(&mut self, message: Message) -> Command<Message> {
        match message {
            // Intercepted here because spawning the call needs the service;
            // the view handles the state transition itself.
            Message::Converter(converter_view::Message::ConvertPressed) => {
                if !self.converter.can_convert() {
                    return Command::none();
                }
                let request = ConversionRequest {
                    curl_command: self.converter.curl_input().to_string(),
                };
                self.converter.update(converter_view::Message::ConvertPressed);
                let service = self.service.clone();
                Command::perform(
                    async move { service.convert(&request).await.map_err(|e| e.to_string()) },
                    |result| {
                        Message::Converter(converter_view::Message::ConversionFinished(result))
                    },
                )
            }
            Message::Converter(msg) => {
                self.converter.update(msg);
                Command::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        column![self.converter.view().map(Message::Converter)].into()
    }
}
