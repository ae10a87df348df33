fn main() {
    booking_frontend::start();
}
