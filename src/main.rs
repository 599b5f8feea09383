fn main() -> anyhow::Result<()> {
    roughsketch::run()
}
