fn main() {
    println!("cargo::rustc-check-cfg=cfg(x86_64)");

    #[cfg(target_arch = "x86_64")]
    println!("cargo::rustc-cfg=x86_64");
}
