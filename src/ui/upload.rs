/// Upload screen: one panel per simulator phase
///
/// Idle shows the picker prompt, Uploading a determinate progress bar,
/// Processing an indeterminate notice, Done the final artifact preview.
use crate::state::upload::{UploadPhase, UploadSimulator};
use crate::Message;
use iced::widget::{button, column, container, image, progress_bar, text};
use iced::{Alignment, Element, Length};

pub fn upload_screen(simulator: &UploadSimulator) -> Element<'_, Message> {
    let panel: Element<_> = match simulator.phase() {
        UploadPhase::Idle => idle_prompt(),
        UploadPhase::Uploading => uploading_panel(simulator),
        UploadPhase::Processing => processing_panel(),
        UploadPhase::Done => done_panel(simulator),
    };

    container(panel)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}

fn idle_prompt() -> Element<'static, Message> {
    column![
        text("Share a picture").size(28),
        text("Pick an image and watch the simulated upload pipeline run.").size(14),
        button(text("Choose Image…").size(16))
            .padding([10.0, 20.0])
            .on_press(Message::PickArtifact),
    ]
    .spacing(16)
    .align_x(Alignment::Center)
    .into()
}

fn uploading_panel(simulator: &UploadSimulator) -> Element<'static, Message> {
    column![
        text(format!("Uploading {}…", artifact_name(simulator))).size(18),
        progress_bar(0.0..=1.0, simulator.progress())
            .width(Length::Fixed(320.0))
            .height(Length::Fixed(12.0)),
        text(format!("{:.0}%", simulator.progress() * 100.0)).size(14),
    ]
    .spacing(16)
    .align_x(Alignment::Center)
    .into()
}

fn processing_panel() -> Element<'static, Message> {
    column![
        text("Processing…").size(18),
        text("Hang tight, applying the finishing touches.").size(14),
    ]
    .spacing(12)
    .align_x(Alignment::Center)
    .into()
}

fn done_panel(simulator: &UploadSimulator) -> Element<'_, Message> {
    let mut panel = column![text("Upload complete 🎉").size(22)]
        .spacing(16)
        .align_x(Alignment::Center);

    if let Some(path) = simulator.selected_artifact() {
        panel = panel.push(image(image::Handle::from_path(path)).width(Length::Fixed(360.0)));
        panel = panel.push(text(artifact_name(simulator)).size(13));
    }

    panel
        .push(
            button(text("Upload Another").size(16))
                .padding([10.0, 20.0])
                .on_press(Message::PickArtifact),
        )
        .into()
}

fn artifact_name(simulator: &UploadSimulator) -> String {
    simulator
        .selected_artifact()
        .and_then(|path| path.file_name())
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "image".to_string())
}
