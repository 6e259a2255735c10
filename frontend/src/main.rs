fn main() {
    rakshak_frontend::start();
}
