// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

#![allow(dead_code)]

use minicbor::data::Tag;
use minicbor::Encoder;

/// Published sample vaccination certificate (issuer AT, two-dose series, first dose).
pub const REFERENCE_TOKEN: &str = "HC1:NCFP70M90T9WTWGVLKJ99K83X4C8DTTMMX*4DBB3XK4F3A:OK.G2F3K*S7Y0/IC6TAY50.FK6ZK7:EDOLFVC*70B$D% D3IA4W5646946846.966KCN9E%961A6DL6FA7D46XJCCWENF6OF63W5KF60A6WJCT3EHS8WJC0FDTA6AIA%G7X+AQB9746IG77TA$96T476:6/Q6M*8CR63Y8R46WX8F46VL6/G8SF6DR64S8+96QK4.JCP9EJY8L/5M/5546.96VF6%JC QE/IAYJC5LEW34U3ET7DXC9 QE-ED8%E3KC.SC4KCD3DX47B46IL6646I*6..DX%DLPCG/DI C+0AD1AZJC1/D/IA:JC5WEI3D4WE*Y9 JC/.DQZ9$PC5$CUZCY$5Y$5JPCT3E5JDNA79%6F464W5%:6378POQUVQ2XNBOKE9V3DRXF3FW01Q5 EC EQ-*MJ94T-12AT$3LR3T: HZEBAQ7PDWT38Y53%VHW8G-4EP3R4$M40SD99C+0.YUC-V%3";

/// Protected header of [`REFERENCE_TOKEN`]: `{4: h'd919375fc1e7b6b2', 1: -7}`.
pub const REFERENCE_PROTECTED_HEX: &str = "a20448d919375fc1e7b6b20126";

const ALPHABET: &[u8; 45] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ $%*+-./:";

pub fn base45_encode(bytes: &[u8]) -> String {
    let mut out = String::new();
    for chunk in bytes.chunks(2) {
        if let [a, b] = *chunk {
            let mut x = (u32::from(a) << 8) | u32::from(b);
            for _ in 0..3 {
                out.push(ALPHABET[(x % 45) as usize] as char);
                x /= 45;
            }
        } else {
            let mut x = u32::from(chunk[0]);
            for _ in 0..2 {
                out.push(ALPHABET[(x % 45) as usize] as char);
                x /= 45;
            }
        }
    }
    out
}

pub fn encode_protected(alg: Option<i64>, kid: Option<&[u8]>) -> Vec<u8> {
    let mut out = Vec::new();
    let mut enc = Encoder::new(&mut out);
    let len = alg.is_some() as u64 + kid.is_some() as u64;
    enc.map(len).unwrap();
    if let Some(alg) = alg {
        enc.i64(1).unwrap().i64(alg).unwrap();
    }
    if let Some(kid) = kid {
        enc.i64(4).unwrap().bytes(kid).unwrap();
    }
    out
}

/// Tagged COSE_Sign1 with an optional kid in the unprotected header.
pub fn encode_cose_sign1(protected: &[u8], unprotected_kid: Option<&[u8]>, payload: &[u8], signature: &[u8]) -> Vec<u8> {
    let mut out = Vec::new();
    let mut enc = Encoder::new(&mut out);
    enc.tag(Tag::new(18)).unwrap();
    enc.array(4).unwrap();
    enc.bytes(protected).unwrap();
    match unprotected_kid {
        Some(kid) => {
            enc.map(1).unwrap().i64(4).unwrap().bytes(kid).unwrap();
        }
        None => {
            enc.map(0).unwrap();
        }
    }
    enc.bytes(payload).unwrap();
    enc.bytes(signature).unwrap();
    out
}
