use quests_server::run_app;

#[actix_web::main]
async fn main() {
    if let Err(err) = run_app().await {
        log::error!("> main > {err}");
        eprintln!("{err}");
        std::process::exit(1);
    }
}
