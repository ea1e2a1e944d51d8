fn main() -> anyhow::Result<()> {
    cirani::run()
}
