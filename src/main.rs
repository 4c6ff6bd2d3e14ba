fn main() {
    ovrboot::app::cli::run();
}
