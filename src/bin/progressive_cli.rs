use anyhow::{bail, Context, Result};
use clap::{value_parser, Arg, Command};
use progressive_codec::{
    to_luma, CompressionConfig, CompressionMethod, Compressor, QualityStats,
};
use std::fs;
use std::path::PathBuf;
use std::time::Instant;

fn main() -> Result<()> {
    env_logger::init();

    let matches = Command::new("Progressive Codec CLI")
        .version("0.1.0")
        .about("DCT / SVD 점진 이미지 압축 도구")
        .arg(
            Arg::new("input")
                .long("input")
                .short('i')
                .value_name("FILE")
                .required(true)
                .value_parser(value_parser!(PathBuf))
                .help("입력 이미지 (PNG, JPEG 등)"),
        )
        .arg(
            Arg::new("method")
                .long("method")
                .short('m')
                .value_name("METHOD")
                .help("압축 방식 (DCT 또는 SVD)"),
        )
        .arg(
            Arg::new("components")
                .long("components")
                .short('c')
                .value_name("COUNT")
                .value_parser(value_parser!(usize))
                .help("성분 수 (기본값: DCT 10, SVD 64)"),
        )
        .arg(
            Arg::new("output-dir")
                .long("output-dir")
                .short('o')
                .value_name("DIR")
                .value_parser(value_parser!(PathBuf))
                .default_value("./progressive_out")
                .help("단계별 PNG와 summary.json 출력 디렉토리"),
        )
        .arg(
            Arg::new("threads")
                .long("threads")
                .short('t')
                .value_name("N")
                .value_parser(value_parser!(usize))
                .help("작업자 스레드 수 (기본값: 하드웨어 스레드 수)"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("JSON")
                .value_parser(value_parser!(PathBuf))
                .help("JSON 설정 파일. 명령행 인자가 우선한다"),
        )
        .get_matches();

    // 설정 파일 → 명령행 인자 순으로 덮어쓴다
    let mut config = match matches.get_one::<PathBuf>("config") {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("설정 파일 읽기 실패: {}", path.display()))?;
            CompressionConfig::from_json_str(&json)?
        }
        None => CompressionConfig::default(),
    };
    if let Some(method) = matches.get_one::<String>("method") {
        config.method = method.parse::<CompressionMethod>()?;
    }
    if let Some(&components) = matches.get_one::<usize>("components") {
        config.components = Some(components);
    }
    if let Some(&threads) = matches.get_one::<usize>("threads") {
        config.num_threads = Some(threads);
    }
    config.validate()?;

    let input = matches
        .get_one::<PathBuf>("input")
        .context("--input is required")?;
    let output_dir = matches
        .get_one::<PathBuf>("output-dir")
        .context("--output-dir has no value")?;

    let image = image::open(input)
        .with_context(|| format!("이미지 열기 실패: {}", input.display()))?
        .to_rgb8();
    if image.width() == 0 || image.height() == 0 {
        bail!("빈 이미지: {}", input.display());
    }

    println!("🖼️  입력: {} ({}x{})", input.display(), image.width(), image.height());
    println!("⚙️  방식: {}", config.method.label());
    println!("   {}", config.method.description());

    let compressor = Compressor::from_config(&config)?;
    let requested = config.effective_components();
    let started = Instant::now();
    let result = compressor.compress(&image, requested)?;
    println!(
        "✅ {}개 단계 복원 완료 ({:?}), 성분 {} → {}",
        result.levels.len(),
        started.elapsed(),
        requested,
        result.effective_components()
    );

    fs::create_dir_all(output_dir)
        .with_context(|| format!("출력 디렉토리 생성 실패: {}", output_dir.display()))?;

    let original = to_luma(&image)?;
    for level in &result.levels {
        let path = output_dir.join(format!("level_{}.png", level.num_components));
        level
            .image
            .to_gray_image()?
            .save(&path)
            .with_context(|| format!("PNG 저장 실패: {}", path.display()))?;

        let stats = QualityStats::measure(&original, &level.image)?;
        log::info!("k={} {}", level.num_components, stats);
        println!(
            "  k={:>3}  {:>8} bytes  ({:6.2}%)  {}",
            level.num_components,
            level.approximate_byte_size,
            result.size_percentage(level),
            stats
        );
    }

    let summary_path = output_dir.join("summary.json");
    let summary = serde_json::to_string_pretty(&result.summary())?;
    fs::write(&summary_path, summary)
        .with_context(|| format!("요약 저장 실패: {}", summary_path.display()))?;
    println!("📄 요약: {}", summary_path.display());

    Ok(())
}
