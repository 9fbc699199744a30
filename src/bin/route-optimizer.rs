fn main() -> Result<(), Box<dyn std::error::Error>> {
    route_optimizer::app::run()
}
