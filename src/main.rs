use curl2py::conversion::GeminiService;
use curl2py::ui::app;

fn main() -> iced::Result {
    env_logger::init();

    let service = match GeminiService::from_env() {
        Ok(service) => service,
        Err(e) => {
            eprintln!("curl2py: {e}");
            std::process::exit(2);
        }
    };

    app::run(service)
}
