//! The single page of the app: command input, convert action, generated
//! code pane, copy action, and the notification banner.

use iced::widget::{button, column, container, row, scrollable, text, text_input, Rule};
use iced::{Alignment, Element, Length};
use log::error;

use crate::conversion::ConversionResult;
use crate::ui::clipboard::{Clipboard, SystemClipboard};
use crate::ui::components::toast::Toast;

const PLACEHOLDER_CURL: &str =
    "curl -X POST 'https://api.example.com/v1/users' -H 'Content-Type: application/json' -d '{\"name\": \"John Doe\"}'";

#[derive(Debug, Clone)]
pub enum Message {
    CurlInputChanged(String),
    ConvertPressed,
    ConversionFinished(Result<ConversionResult, String>),
    CopyPressed,
    ToastDismissed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConversionStatus {
    #[default]
    Idle,
    Converting,
}

/// View state. The generated code lives in a single slot that is cleared on
/// every new attempt and replaced wholesale on success.
pub struct ConverterView {
    curl_input: String,
    python_code: String,
    status: ConversionStatus,
    toasts: Vec<Toast>,
    clipboard: Box<dyn Clipboard>,
}

impl Default for ConverterView {
    fn default() -> Self {
        Self::new()
    }
}

impl ConverterView {
    pub fn new() -> Self {
        Self::with_clipboard(Box::new(SystemClipboard))
    }

    pub fn with_clipboard(clipboard: Box<dyn Clipboard>) -> Self {
        Self {
            curl_input: String::new(),
            python_code: String::new(),
            status: ConversionStatus::Idle,
            toasts: Vec::new(),
            clipboard,
        }
    }

    pub fn curl_input(&self) -> &str {
        &self.curl_input
    }

    pub fn python_code(&self) -> &str {
        &self.python_code
    }

    pub fn status(&self) -> ConversionStatus {
        self.status
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn is_converting(&self) -> bool {
        self.status == ConversionStatus::Converting
    }

    /// A conversion may start only from Idle with a non-empty command.
    pub fn can_convert(&self) -> bool {
        !self.is_converting() && !self.curl_input.is_empty()
    }

    /// Copy is available only for a displayed result.
    pub fn can_copy(&self) -> bool {
        !self.is_converting() && !self.python_code.is_empty()
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::CurlInputChanged(input) => self.curl_input = input,
            Message::ConvertPressed => {
                if !self.can_convert() {
                    return;
                }
                self.status = ConversionStatus::Converting;
                self.python_code.clear();
                self.toasts.clear();
            }
            Message::ConversionFinished(result) => {
                self.status = ConversionStatus::Idle;
                match result {
                    Ok(result) => self.python_code = result.python_code,
                    Err(e) => {
                        error!("conversion failed: {e}");
                        self.toasts.push(Toast::error(
                            "Error",
                            "Failed to convert the cURL command. Please try again.",
                        ));
                    }
                }
            }
            Message::CopyPressed => {
                if !self.can_copy() {
                    return;
                }
                match self.clipboard.set_text(&self.python_code) {
                    Ok(()) => self.toasts.push(Toast::success(
                        "Copied!",
                        "Python code has been copied to your clipboard.",
                    )),
                    Err(e) => error!("clipboard write failed: {e}"),
                }
            }
            Message::ToastDismissed => self.toasts.clear(),
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let header = column![
            text("Instantly Convert cURL to Python").size(28),
            text("Paste your cURL command and let the model turn it into clean, readable Python code.")
                .size(16),
        ]
        .spacing(8)
        .align_items(Alignment::Center);

        let convert_label = if self.is_converting() {
            "Converting..."
        } else {
            "Convert to Python"
        };

        let input_panel = column![
            text("cURL Command").size(20),
            text_input(PLACEHOLDER_CURL, &self.curl_input)
                .on_input(Message::CurlInputChanged)
                .padding(10),
            button(convert_label)
                .padding(10)
                .on_press_maybe(self.can_convert().then_some(Message::ConvertPressed)),
        ]
        .spacing(10)
        .width(Length::FillPortion(1));

        let output_area: Element<'_, Message> = if self.is_converting() {
            container(text("Converting your command..."))
                .width(Length::Fill)
                .height(Length::Fill)
                .center_x()
                .center_y()
                .into()
        } else if self.python_code.is_empty() {
            container(text("Your Python code will appear here..."))
                .width(Length::Fill)
                .height(Length::Fill)
                .center_x()
                .center_y()
                .into()
        } else {
            container(scrollable(text(&self.python_code)))
                .width(Length::Fill)
                .height(Length::Fill)
                .padding(10)
                .into()
        };

        let output_panel = column![
            row![
                text("Python Code").size(20).width(Length::Fill),
                button("Copy")
                    .on_press_maybe(self.can_copy().then_some(Message::CopyPressed)),
            ]
            .align_items(Alignment::Center),
            container(output_area)
                .width(Length::Fill)
                .height(Length::Fixed(320.0)),
        ]
        .spacing(10)
        .width(Length::FillPortion(1));

        let banner: Element<'_, Message> = match self.toasts.last() {
            Some(toast) => toast.view(Message::ToastDismissed),
            None => column![].into(),
        };

        column![
            header,
            Rule::horizontal(10),
            row![input_panel, output_panel].spacing(24),
            banner,
            text("Powered by Gemini").size(12),
        ]
        .spacing(20)
        .padding(24)
        .align_items(Alignment::Center)
        .into()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::ui::components::toast::ToastKind;

    struct RecordingClipboard {
        writes: Rc<RefCell<Vec<String>>>,
    }

    impl Clipboard for RecordingClipboard {
        fn set_text(&mut self, text: &str) -> Result<(), String> {
            self.writes.borrow_mut().push(text.to_string());
            Ok(())
        }
    }

    struct FailingClipboard;

    impl Clipboard for FailingClipboard {
        fn set_text(&mut self, _text: &str) -> Result<(), String> {
            Err("no clipboard".to_string())
        }
    }

    fn view_with_recorder() -> (ConverterView, Rc<RefCell<Vec<String>>>) {
        let writes = Rc::new(RefCell::new(Vec::new()));
        let view = ConverterView::with_clipboard(Box::new(RecordingClipboard {
            writes: Rc::clone(&writes),
        }));
        (view, writes)
    }

    const PING_CODE: &str =
        "import requests\nresponse = requests.get('https://api.example.com/ping')\nprint(response.text)";

    #[test]
    fn convert_requires_non_empty_input() {
        let (mut view, _) = view_with_recorder();
        view.update(Message::ConvertPressed);
        assert_eq!(view.status(), ConversionStatus::Idle);
    }

    #[test]
    fn convert_enters_converting_and_clears_previous_output() {
        let (mut view, _) = view_with_recorder();
        view.update(Message::CurlInputChanged("curl https://a".to_string()));
        view.update(Message::ConversionFinished(Ok(ConversionResult {
            python_code: "old".to_string(),
        })));
        view.update(Message::ConvertPressed);
        assert_eq!(view.status(), ConversionStatus::Converting);
        assert!(view.python_code().is_empty());
    }

    #[test]
    fn convert_while_converting_is_a_no_op() {
        let (mut view, _) = view_with_recorder();
        view.update(Message::CurlInputChanged("curl https://a".to_string()));
        view.update(Message::ConvertPressed);
        assert!(!view.can_convert());
        view.update(Message::ConvertPressed);
        assert_eq!(view.status(), ConversionStatus::Converting);
        assert!(view.toasts().is_empty());
    }

    #[test]
    fn success_replaces_output_exactly() {
        let (mut view, _) = view_with_recorder();
        view.update(Message::CurlInputChanged(
            "curl -X GET 'https://api.example.com/ping'".to_string(),
        ));
        view.update(Message::ConvertPressed);
        view.update(Message::ConversionFinished(Ok(ConversionResult {
            python_code: PING_CODE.to_string(),
        })));
        assert_eq!(view.status(), ConversionStatus::Idle);
        assert_eq!(view.python_code(), PING_CODE);
        assert!(view.toasts().is_empty());
    }

    #[test]
    fn failure_returns_to_idle_with_one_error_toast() {
        let (mut view, _) = view_with_recorder();
        view.update(Message::CurlInputChanged("curl https://a".to_string()));
        view.update(Message::ConvertPressed);
        view.update(Message::ConversionFinished(Err("boom".to_string())));
        assert_eq!(view.status(), ConversionStatus::Idle);
        assert!(view.python_code().is_empty());
        assert_eq!(view.toasts().len(), 1);
        assert_eq!(view.toasts()[0].kind, ToastKind::Error);
    }

    #[test]
    fn copy_without_output_is_a_no_op() {
        let (mut view, writes) = view_with_recorder();
        view.update(Message::CopyPressed);
        assert!(writes.borrow().is_empty());
        assert!(view.toasts().is_empty());
    }

    #[test]
    fn copy_writes_displayed_text_and_raises_one_confirmation() {
        let (mut view, writes) = view_with_recorder();
        view.update(Message::ConversionFinished(Ok(ConversionResult {
            python_code: PING_CODE.to_string(),
        })));
        view.update(Message::CopyPressed);
        assert_eq!(writes.borrow().as_slice(), [PING_CODE.to_string()]);
        assert_eq!(view.toasts().len(), 1);
        assert_eq!(view.toasts()[0].kind, ToastKind::Success);
    }

    #[test]
    fn copy_failure_raises_no_toast() {
        let mut view = ConverterView::with_clipboard(Box::new(FailingClipboard));
        view.update(Message::ConversionFinished(Ok(ConversionResult {
            python_code: "print('hi')".to_string(),
        })));
        view.update(Message::CopyPressed);
        assert!(view.toasts().is_empty());
    }

    #[test]
    fn new_attempt_clears_stale_toast() {
        let (mut view, _) = view_with_recorder();
        view.update(Message::CurlInputChanged("curl https://a".to_string()));
        view.update(Message::ConvertPressed);
        view.update(Message::ConversionFinished(Err("boom".to_string())));
        assert_eq!(view.toasts().len(), 1);
        view.update(Message::ConvertPressed);
        assert!(view.toasts().is_empty());
    }

    #[test]
    fn dismiss_clears_the_banner() {
        let (mut view, _) = view_with_recorder();
        view.update(Message::ConversionFinished(Err("boom".to_string())));
        view.update(Message::ToastDismissed);
        assert!(view.toasts().is_empty());
    }
}
