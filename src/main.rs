fn main() {
    defect_detect_web::start();
}
