//! Binary persistence of haplotype calls.
//!
//! A file is `MAGIC`, the format version as a little-endian u32,
//! and the MessagePack encoding of a `HaplotypeCalls`.
use super::error::{Error, Result};
use super::hap_call::{HaplotypeCall, HaplotypeCalls};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

pub const MAGIC: &[u8; 4] = b"HAPC";
pub const FORMAT_VERSION: u32 = 1;

pub fn to_writer<W: Write>(calls: &HaplotypeCalls, mut wtr: W) -> Result<()> {
    wtr.write_all(MAGIC)?;
    wtr.write_all(&FORMAT_VERSION.to_le_bytes())?;
    rmp_serde::encode::write(&mut wtr, calls)?;
    wtr.flush()?;
    Ok(())
}

pub fn from_reader<R: Read>(mut rdr: R) -> Result<HaplotypeCalls> {
    let mut magic = [0u8; 4];
    rdr.read_exact(&mut magic).map_err(eof_as_bad_magic)?;
    if &magic != MAGIC {
        return Err(Error::BadMagic);
    }
    let mut version = [0u8; 4];
    rdr.read_exact(&mut version).map_err(eof_as_bad_magic)?;
    let version = u32::from_le_bytes(version);
    if version != FORMAT_VERSION {
        return Err(Error::UnsupportedVersion(version));
    }
    let calls = rmp_serde::decode::from_read(&mut rdr)?;
    if rdr.read(&mut [0u8; 1])? != 0 {
        return Err(Error::TrailingBytes);
    }
    Ok(calls)
}

fn eof_as_bad_magic(why: std::io::Error) -> Error {
    match why.kind() {
        std::io::ErrorKind::UnexpectedEof => Error::BadMagic,
        _ => Error::Stream(why),
    }
}

/// Save `calls` into `path`. The file is truncated if it exists.
pub fn save_calls<P: AsRef<Path>>(calls: &HaplotypeCalls, path: P) -> Result<()> {
    let path = path.as_ref();
    let wtr = File::create(path).map_err(|source| {
        error!("Could not save calls to location '{}'", path.display());
        Error::Io {
            path: path.to_path_buf(),
            source,
        }
    })?;
    to_writer(calls, BufWriter::new(wtr))?;
    debug!("Saved {} calls to {}", calls.len(), path.display());
    Ok(())
}

pub fn load_calls<P: AsRef<Path>>(path: P) -> Result<Vec<HaplotypeCall>> {
    let path = path.as_ref();
    let rdr = File::open(path).map_err(|source| {
        error!("Could not open haplotype calls file {}", path.display());
        Error::Io {
            path: path.to_path_buf(),
            source,
        }
    })?;
    let calls = from_reader(BufReader::new(rdr))?;
    debug!("Loaded {} calls from {}", calls.len(), path.display());
    Ok(calls.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Genotype, ReadStrandCount};
    fn calls() -> HaplotypeCalls {
        HaplotypeCalls::new(vec![
            HaplotypeCall {
                calls: vec![0, 3, 9],
                haplotype_impurity: vec![1, 0, 4, u64::MAX],
                num_samples: 3,
                gts: vec![Genotype::new(0, 120, 2), Genotype::new(1, 131, 2)],
                read_strand: vec![
                    vec![ReadStrandCount::new(1, 2, 3, 4); 3],
                    vec![ReadStrandCount::default(); 3],
                ],
            },
            HaplotypeCall::default(),
        ])
    }
    #[test]
    fn stream_round_trip() {
        let mut buf = vec![];
        to_writer(&calls(), &mut buf).unwrap();
        assert_eq!(&buf[..4], MAGIC);
        let loaded = from_reader(buf.as_slice()).unwrap();
        assert_eq!(loaded, calls());
        assert!(loaded[1].read_strand.is_empty());
    }
    #[test]
    fn file_round_trip() {
        let name = format!("hapc_round_trip_{}.hapc", std::process::id());
        let path = std::env::temp_dir().join(name);
        save_calls(&calls(), &path).unwrap();
        let loaded = load_calls(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(loaded, calls().into_inner());
    }
    #[test]
    fn missing_file() {
        let path = std::env::temp_dir().join("hapc_no_such_dir").join("calls.hapc");
        match load_calls(&path) {
            Err(Error::Io { path: p, .. }) => assert_eq!(p, path),
            res => panic!("{:?}", res),
        }
        assert!(matches!(
            save_calls(&calls(), &path),
            Err(Error::Io { .. })
        ));
    }
    #[test]
    fn reject_foreign_bytes() {
        assert!(matches!(
            from_reader(&b"BAMX\x01\x00\x00\x00"[..]),
            Err(Error::BadMagic)
        ));
        assert!(matches!(from_reader(&b"HA"[..]), Err(Error::BadMagic)));
        let mut buf = vec![];
        to_writer(&calls(), &mut buf).unwrap();
        buf[4] = 2;
        assert!(matches!(
            from_reader(buf.as_slice()),
            Err(Error::UnsupportedVersion(2))
        ));
    }
    #[test]
    fn reject_truncated_body() {
        let mut buf = vec![];
        to_writer(&calls(), &mut buf).unwrap();
        buf.truncate(buf.len() - 3);
        assert!(matches!(from_reader(buf.as_slice()), Err(Error::Decode(_))));
    }
    #[test]
    fn reject_trailing_bytes() {
        let mut buf = vec![];
        let first = HaplotypeCalls::new(vec![HaplotypeCall::default()]);
        to_writer(&first, &mut buf).unwrap();
        let mut second = vec![];
        to_writer(&calls(), &mut second).unwrap();
        buf.extend_from_slice(&second[8..]);
        assert!(matches!(
            from_reader(buf.as_slice()),
            Err(Error::TrailingBytes)
        ));
        let mut buf = vec![];
        to_writer(&calls(), &mut buf).unwrap();
        buf.push(0);
        assert!(matches!(
            from_reader(buf.as_slice()),
            Err(Error::TrailingBytes)
        ));
    }
}
