pub fn main() -> iced::Result {
    study_browser::app::run()
}
