fn main() {
    agent_console_sidebar::run();
}
