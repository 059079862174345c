fn main() -> anyhow::Result<()> {
    farmassist_lib::run()
}
