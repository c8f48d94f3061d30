// Endpoint
pub const DEFAULT_PREDICT_URL: &str = "https://chatbot-ebx8.onrender.com/predict";
pub const DEFAULT_REPLY_DELAY_MS: u64 = 800;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

// Widget text
pub const DEFAULT_BOT_NAME: &str = "Sam";
pub const TYPING_PLACEHOLDER: &str = "Typing...";
pub const INPUT_HINT: &str = "Write a message...";
pub const HEADER_TITLE: &str = "Chat support 👇";
pub const REFRESH_LABEL: &str = "Refresh options";
pub const SEND_LABEL: &str = "Send";

pub const INITIAL_QUESTIONS: [&str; 3] = ["!info", "!commands", "!links"];

// Floating box geometry
pub const CHATBOX_WIDTH: u16 = 48;
pub const CHATBOX_HEIGHT: u16 = 26;
pub const LAUNCHER_WIDTH: u16 = 9;
pub const LAUNCHER_HEIGHT: u16 = 3;

pub fn greeting(bot_name: &str) -> String {
    format!("Hi, My name is {}. How can I help you?", bot_name)
}
