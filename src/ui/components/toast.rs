//! Fire-and-forget notification banner.

use iced::widget::{button, container, row, text};
use iced::{theme, Alignment, Color, Element, Length};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub title: String,
    pub body: String,
    pub kind: ToastKind,
}

impl Toast {
    pub fn success(title: &str, body: &str) -> Self {
        Self {
            title: title.to_string(),
            body: body.to_string(),
            kind: ToastKind::Success,
        }
    }

    pub fn error(title: &str, body: &str) -> Self {
        Self {
            title: title.to_string(),
            body: body.to_string(),
            kind: ToastKind::Error,
        }
    }

    pub fn view<'a, M: Clone + 'a>(&'a self, on_dismiss: M) -> Element<'a, M> {
        let title_color = match self.kind {
            ToastKind::Success => Color::from_rgb(0.13, 0.55, 0.13),
            ToastKind::Error => Color::from_rgb(0.75, 0.13, 0.13),
        };

        container(
            row![
                text(&self.title)
                    .size(16)
                    .style(theme::Text::Color(title_color)),
                text(&self.body).size(14).width(Length::Fill),
                button(text("Dismiss").size(14)).on_press(on_dismiss),
            ]
            .spacing(12)
            .align_items(Alignment::Center),
        )
        .padding(10)
        .width(Length::Fill)
        .style(theme::Container::Box)
        .into()
    }
}
