use mtsvg::batch::{load_raw_genomes, read_batch_file};
use mtsvg::{
    MapKind, MtSvgError, NormalizeOptions, RenderOptions, export_svg, normalize_genomes,
};
use std::fs;
use std::path::Path;

const HUMAN: &str = "\
##gff-version 3
chrM\tmitos\tgene\t3307\t4262\t.\t+\t.\tName=nad1
chrM\tmitos\ttRNA\t4263\t4331\t.\t+\t.\tName=trnI
chrM\tmitos\tgene\t5904\t7445\t.\t-\t.\tName=cox1
chrM\tmitos\trRNA\t1671\t3229\t.\t+\t.\tName=rrnL
";

const MOUSE: &str = "\
NC_005089\tRefSeq\tregion\t1\t16299\t.\t+\t.\tID=NC_005089:1..16299
NC_005089\tRefSeq\tgene\t2751\t3707\t.\t+\t.\tID=gene-ND1;gene=ND1
NC_005089\tRefSeq\tgene\t5328\t6872\t.\t+\t.\tID=gene-COX1;gene=COX1
NC_005089\tRefSeq\tgene\t1094\t2675\t.\t+\t.\tID=gene-rnr2
NC_005089\tRefSeq\trRNA\t1094\t2675\t.\t+\t.\tID=rna-rnr2;product=l-rRNA
";

fn write_inputs(dir: &Path, batch: &str) -> std::path::PathBuf {
    fs::write(dir.join("human.gff"), HUMAN).unwrap();
    fs::write(dir.join("mouse.gff"), MOUSE).unwrap();
    fs::write(dir.join("empty.gff"), "##gff-version 3\n").unwrap();
    let path = dir.join("genomes.csv");
    fs::write(&path, batch).unwrap();
    path
}

#[test]
fn batch_to_linear_svg() {
    let dir = tempfile::tempdir().unwrap();
    let batch = write_inputs(
        dir.path(),
        "# two genomes and one without genes\n\
         Homo sapiens;16569;human.gff\n\
         Mus musculus;16299;mouse.gff;no\n\
         Nothing here;1000;empty.gff\n",
    );
    let entries = read_batch_file(&batch).unwrap();
    let raw = load_raw_genomes(&entries, &["trn".to_string()], None).unwrap();
    let genomes = normalize_genomes(raw, &NormalizeOptions::default()).unwrap();
    assert_eq!(genomes.len(), 2);
    for genome in &genomes {
        assert_eq!(genome.genes[0].name, "cox1");
        assert!(genome.genes.iter().all(|g| (1..=10).contains(&g.units())));
    }

    let out = dir.path().join("map.svg");
    let options = RenderOptions {
        show_orientation: true,
        ..RenderOptions::default()
    };
    export_svg(&genomes, &options, &out).unwrap();
    let svg = fs::read_to_string(&out).unwrap();
    assert!(svg.contains("Homo sapiens (16,569 bp)"));
    assert!(svg.contains("Mus musculus (16,299 bp)"));
    assert!(svg.contains("#f2ed8d"));
    assert!(svg.contains("#ac759a"));
    assert!(!svg.contains("trni"));
}

#[test]
fn single_genome_to_circular_svg() {
    let dir = tempfile::tempdir().unwrap();
    let batch = write_inputs(dir.path(), "Homo sapiens;16569;human.gff;yes\n");
    let entries = read_batch_file(&batch).unwrap();
    let raw = load_raw_genomes(&entries, &[], None).unwrap();
    let options = NormalizeOptions {
        intergenic: 100,
        ..NormalizeOptions::default()
    };
    let genomes = normalize_genomes(raw, &options).unwrap();
    assert!(genomes[0].genes.iter().any(|g| g.is_intergenic()));

    let out = dir.path().join("circular.svg");
    let render = RenderOptions {
        kind: MapKind::Circular,
        ..RenderOptions::default()
    };
    export_svg(&genomes, &render, &out).unwrap();
    let svg = fs::read_to_string(&out).unwrap();
    assert!(svg.contains("<circle"));
    assert!(svg.contains("(16,569 bp)"));
    assert!(svg.contains(" A "));
}

#[test]
fn circular_rejects_several_genomes() {
    let dir = tempfile::tempdir().unwrap();
    let batch = write_inputs(
        dir.path(),
        "Homo sapiens;16569;human.gff\nMus musculus;16299;mouse.gff\n",
    );
    let entries = read_batch_file(&batch).unwrap();
    let raw = load_raw_genomes(&entries, &[], None).unwrap();
    let genomes = normalize_genomes(raw, &NormalizeOptions::default()).unwrap();
    let render = RenderOptions {
        kind: MapKind::Circular,
        ..RenderOptions::default()
    };
    let out = dir.path().join("never.svg");
    let err = export_svg(&genomes, &render, &out).unwrap_err();
    assert!(matches!(err, MtSvgError::CircularGenomeCount(2)));
    assert!(!out.exists());
}

#[test]
fn batch_of_empty_genomes_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let batch = write_inputs(dir.path(), "Nothing here;1000;empty.gff\n");
    let entries = read_batch_file(&batch).unwrap();
    let raw = load_raw_genomes(&entries, &[], None).unwrap();
    let err = normalize_genomes(raw, &NormalizeOptions::default()).unwrap_err();
    assert!(matches!(err, MtSvgError::NoGenes));
}
