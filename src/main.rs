use rpsls::gameplay::Engine;

fn main() {
    rpsls::log();
    Engine::new().play();
}
