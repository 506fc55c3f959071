fn main() {
    checkpoint_frontend::run();
}
