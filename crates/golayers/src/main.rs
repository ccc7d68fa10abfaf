fn main() -> anyhow::Result<()> {
    golayers_lib::main()
}
