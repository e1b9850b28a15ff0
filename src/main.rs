fn main() {
    astwalk::cmd::run();
}
