use super::*;

fn block(sample_calls: &[&[u16]], strand: u32) -> GenotypedBlock {
    let gts = vec![Genotype::new(0, 40, 2), Genotype::new(1, 52, 2)];
    let var_stats = gts
        .iter()
        .map(|_| VarStats {
            read_strand: vec![ReadStrandCount::new(strand, 0, 0, strand); sample_calls.len()],
        })
        .collect();
    let hap_samples = sample_calls
        .iter()
        .map(|calls| {
            let mut impurity = vec![0; 4];
            calls.iter().for_each(|&c| impurity[c as usize] += 1);
            HapSample {
                calls: calls.to_vec(),
                impurity,
            }
        })
        .collect();
    GenotypedBlock {
        gts,
        var_stats,
        hap_samples,
    }
}

fn temp_path(name: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!("{}_{}.hapc", name, std::process::id()))
}

#[test]
fn construct_from_block() {
    let call = HaplotypeCall::new(&block(&[&[0, 1], &[3]], 2));
    assert_eq!(call.calls, vec![0, 1, 3]);
    assert_eq!(call.haplotype_impurity, vec![1, 1, 0, 1]);
    assert_eq!(call.num_samples, 2);
    assert_eq!(call.gts.len(), 2);
    assert_eq!(call.read_strand.len(), call.gts.len());
    assert_eq!(call.read_strand[1][1], ReadStrandCount::new(2, 0, 0, 2));
}

#[test]
#[should_panic]
fn construct_with_missing_stats() {
    let mut block = block(&[&[0, 1]], 1);
    block.var_stats.pop();
    HaplotypeCall::new(&block);
}

#[test]
fn blocks_keep_their_order() {
    let blocks: Vec<_> = (0..64u32)
        .map(|i| block(&[&[0, (i % 4) as u16]], i))
        .collect();
    let calls = HaplotypeCalls::from_blocks(&blocks);
    assert_eq!(calls.len(), 64);
    for (i, call) in calls.iter().enumerate() {
        assert_eq!(call.read_strand[0][0].r1_forward, i as u32);
    }
}

#[test]
fn merge_saved_batches() {
    let batch1 = HaplotypeCalls::from_blocks(&[block(&[&[0, 2]], 1), block(&[&[1]], 1)]);
    let batch2 = HaplotypeCalls::from_blocks(&[block(&[&[2, 1]], 3), block(&[&[0]], 3)]);
    let (p1, p2) = (temp_path("merge_batch1"), temp_path("merge_batch2"));
    save_calls(&batch1, &p1).unwrap();
    save_calls(&batch2, &p2).unwrap();
    let merged = merge_files(&[&p1, &p2]).unwrap();
    std::fs::remove_file(&p1).unwrap();
    std::fs::remove_file(&p2).unwrap();
    assert_eq!(merged.len(), 2);
    assert_eq!(merged[0].calls, vec![0, 1, 2]);
    assert_eq!(merged[0].num_samples, 2);
    assert_eq!(merged[0].haplotype_impurity, vec![1, 1, 2, 0]);
    assert_eq!(merged[0].read_strand[0][0], ReadStrandCount::new(4, 0, 0, 4));
    assert_eq!(merged[1].calls, vec![0, 1]);
}

#[test]
fn merge_no_files() {
    let paths: Vec<std::path::PathBuf> = vec![];
    assert!(merge_files(&paths).unwrap().is_empty());
}

#[test]
fn merge_missing_file() {
    let path = temp_path("never_written");
    assert!(matches!(merge_files(&[&path]), Err(Error::Io { .. })));
}

#[test]
fn merge_files_with_different_block_counts() {
    let batch1 = HaplotypeCalls::from_blocks(&[block(&[&[0, 2]], 1), block(&[&[1]], 1)]);
    let batch2 = HaplotypeCalls::from_blocks(&[block(&[&[2, 1]], 3)]);
    let (p1, p2) = (temp_path("uneven_batch1"), temp_path("uneven_batch2"));
    save_calls(&batch1, &p1).unwrap();
    save_calls(&batch2, &p2).unwrap();
    let merged = merge_files(&[&p1, &p2]);
    std::fs::remove_file(&p1).unwrap();
    std::fs::remove_file(&p2).unwrap();
    match merged {
        Err(Error::BlockCountMismatch {
            path,
            expected,
            found,
        }) => {
            assert_eq!(path, p2);
            assert_eq!(expected, 2);
            assert_eq!(found, 1);
        }
        res => panic!("{:?}", res),
    }
}
