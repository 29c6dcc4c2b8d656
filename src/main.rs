fn main() {
    pollster::block_on(wtransform::run(wtransform::Settings::default()));
}
