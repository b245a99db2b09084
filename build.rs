fn main() -> Result<(), Box<dyn std::error::Error>> {
    let out_dir = std::path::PathBuf::from(std::env::var("OUT_DIR")?);

    // 生成 gRPC 代码,同时导出描述符供服务反射使用
    tonic_prost_build::configure()
        .file_descriptor_set_path(out_dir.join("hello_descriptor.bin"))
        .compile_protos(&["proto/hello.proto"], &["proto"])?;

    Ok(())
}
