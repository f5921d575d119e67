fn main() {
    checkers_engine::protocol::run_loop();
}
