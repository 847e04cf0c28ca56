use armbian_facts::armbian_release;

fn main() -> anyhow::Result<()> {
    let release = armbian_release::read_armbian_release(armbian_release::ARMBIAN_RELEASE_PATH)?;

    for key in ["board", "board_family", "linux_family", "version"] {
        println!("{}={}", key, release.get(key).map(String::as_str).unwrap_or("<missing>"));
    }

    Ok(())
}
