fn main() {
    // Only compile Windows resources on Windows target
    #[cfg(target_os = "windows")]
    {
        // Embed the Windows resource file (app icon) when present
        if std::path::Path::new("resources/windows/resources.rc").exists() {
            let _ = embed_resource::compile("resources/windows/resources.rc", embed_resource::NONE);
        }
    }
}
