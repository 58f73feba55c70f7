mod add;
mod done;
mod home;
mod layout;
mod question;
mod result;

#[cfg(test)]
mod view_smoke;

pub use add::AddQuestionView;
pub use done::{DoneProps, DoneView};
pub use home::{HomeProps, HomeView};
pub use layout::Page;
pub use question::{QuestionProps, QuestionView};
pub use result::{ResultProps, ResultView};
