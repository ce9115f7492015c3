fn main() {
    garnet::uci::run_uci_loop();
}
