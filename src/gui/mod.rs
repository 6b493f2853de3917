mod app;
mod message;
mod widgets;

pub use app::LetterApp;
pub use message::Message;

use crate::models::LetterState;

/// Open the letter form window, starting from `initial`. Blocks until the window closes.
/// `file_context` overrides the recipient-derived part of the suggested save filename.
pub fn run(initial: LetterState, file_context: Option<String>) -> anyhow::Result<()> {
    iced::application(
        move || LetterApp::new(initial.clone(), file_context.clone()),
        LetterApp::update,
        LetterApp::view,
    )
    .title(LetterApp::title)
    .run()
    .map_err(|e| anyhow::anyhow!("Letter form failed: {}", e))
}
