// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

#![allow(dead_code)]

use std::io::Write;

use flate2::write::ZlibEncoder;
use flate2::Compression;
use hcert::{KeyId, TrustCertificate};
use minicbor::data::Tag;
use minicbor::Encoder;
use p256::ecdsa::signature::Signer;
use p256::ecdsa::SigningKey;
use p256::pkcs8::EncodePublicKey;

/// Published sample vaccination certificate (issuer AT, two-dose series, first dose).
pub const REFERENCE_TOKEN: &str = "HC1:NCFP70M90T9WTWGVLKJ99K83X4C8DTTMMX*4DBB3XK4F3A:OK.G2F3K*S7Y0/IC6TAY50.FK6ZK7:EDOLFVC*70B$D% D3IA4W5646946846.966KCN9E%961A6DL6FA7D46XJCCWENF6OF63W5KF60A6WJCT3EHS8WJC0FDTA6AIA%G7X+AQB9746IG77TA$96T476:6/Q6M*8CR63Y8R46WX8F46VL6/G8SF6DR64S8+96QK4.JCP9EJY8L/5M/5546.96VF6%JC QE/IAYJC5LEW34U3ET7DXC9 QE-ED8%E3KC.SC4KCD3DX47B46IL6646I*6..DX%DLPCG/DI C+0AD1AZJC1/D/IA:JC5WEI3D4WE*Y9 JC/.DQZ9$PC5$CUZCY$5Y$5JPCT3E5JDNA79%6F464W5%:6378POQUVQ2XNBOKE9V3DRXF3FW01Q5 EC EQ-*MJ94T-12AT$3LR3T: HZEBAQ7PDWT38Y53%VHW8G-4EP3R4$M40SD99C+0.YUC-V%3";

/// Self-signed P-256 certificate (CN=HCERT Test DSC EC).
pub const EC_CERT_B64: &str = "MIIBPzCB5qADAgECAgIQkjAKBggqhkjOPQQDAjApMQswCQYDVQQGEwJERTEaMBgGA1UEAwwRSENFUlQgVGVzdCBEU0MgRUMwHhcNMjEwMTAxMDAwMDAwWhcNMzEwMTAxMDAwMDAwWjApMQswCQYDVQQGEwJERTEaMBgGA1UEAwwRSENFUlQgVGVzdCBEU0MgRUMwWTATBgcqhkjOPQIBBggqhkjOPQMBBwNCAAQpp3Ysk1hk9+5VpkbfvqeeIwNZJQUyNZ2ASmrPvLaQMI+nXzQuspzhhYa51XQsCBx2FAIYlrtXsJsvD3BSGrl0MAoGCCqGSM49BAMCA0gAMEUCIHgTfBbbJR8KtkscrnAQRRW64dqLnlL/a4ZIHwjGJzIUAiEAoArp01oF4csdtJtmRdeFur5Y6LT4d9elLiE/Wpi88b8=";

pub const EC_KID_B64: &str = "F/71BPJRF2A=";

/// ES256 vaccination certificate signed by [`EC_CERT_B64`]; kid in the protected header.
pub const ES256_TOKEN: &str = "HC1:NCFP70M90T9WTWGSLKC 4559JAW6S0EBAV9CDBB3XK4F3A:OK.G2F3K*S7Y0/IC6TAY50.FK6ZK7:EDOLFVC*70B$D% D3IA4W5646946846.966KCN9E%961A6DL6FA7D46XJCCWENF6OF63W5KF60A6WJCT3EHS8WJC0FDTA6AIA%G7X+AQB9746IG77TA$96T476:6/Q6M*8CR63Y8R46WX8F46VL6/G8SF6DR64S8+96QK4.JCP9EJY8L/5M/5546.96VF6%JC QE/IAYJC5LEW34U3ET7DXC9 QE-ED8%E3KC.SC4KCD3DX47B46IL6646I*6..DX%DLPCG/DI C+0AD1AZJC1/D/IA:JC5WEI3D4WE*Y9 JC/.DQZ9$PC5$CUZCY$5Y$5JPCT3E5JDNA79%6F464W5%:6P78Q1IEND$%PL3DV.D%3T%C1/OE1:8:4OU/Q28876BB1GQ*LURKBKV.L5$:T5SUN854GHDHVWVBF9T7QVYCQU:U+DSF2B5%LYF9/DBI2";

/// Self-signed RSA-2048 certificate (CN=HCERT Test DSC RSA).
pub const RSA_CERT_B64: &str = "MIICzjCCAbagAwIBAgICEJIwDQYJKoZIhvcNAQELBQAwKjELMAkGA1UEBhMCREUxGzAZBgNVBAMMEkhDRVJUIFRlc3QgRFNDIFJTQTAeFw0yMTAxMDEwMDAwMDBaFw0zMTAxMDEwMDAwMDBaMCoxCzAJBgNVBAYTAkRFMRswGQYDVQQDDBJIQ0VSVCBUZXN0IERTQyBSU0EwggEiMA0GCSqGSIb3DQEBAQUAA4IBDwAwggEKAoIBAQCxiUhcuiON+A3ncTEKizOY0xzzoaX7MxoMnb/ja1Ct/pZsJIxH9j+lAvRXDZqHoSgOc2gU3p1CeBm350zMR0koWWo+jaWHI3aq/9lq7xdR8m/fFtfBlweqAKZSGZw0t1bzjSSDUalL6c/tp7XkomQuIDcTiQmgfD9DhsQnarMFzYxUeCdp1gw+rlnMHdBWlqodlgprl1OZbCqY7d/892nxKWnM5BHiHCh7WuBaMjAtZ56c9sER6qPZV1abhr/r2k8AJXstFKJMM8IS4vtmDpoVxUZv9qAGwYOph0FwwWPGK3gNWeVEdGSF0brHwOUJQ9e/Rvwt2Q2ASTBhe701fOwbAgMBAAEwDQYJKoZIhvcNAQELBQADggEBACMwuJGQrhE99Qvja/COMjYpkrFix8kqwYDCcQrccrPGeMeN4Zw6IcdrDSVIqFO0WVpfUWdCjv0u3ebnGWZkG/6EdGDVsfk35YcPE5rCyb1UOygcMcpLta4lU6unqJytIzf5BtLKkayIu9w70C5d0NYA1F2QkqqzbM8FvjsChNjML9PQxQxTEdae0CXcWRyMYk+imfgbOdTXDTjJYllrluIwOpTPAK0TaGmsL/3KyHxYTw4NPdVCModcKPH15Temn1CeQHTzuyrw95kvOCDQ42xMDr49klYqC5f0iRKcNdl9Si1ux7BecadPRJ8a+vAj08+KtsbGi1acxOcvkX5D2r0=";

pub const RSA_KID_B64: &str = "KCHGcCcyXmU=";

/// PS256 test certificate signed by [`RSA_CERT_B64`]; kid only in the unprotected header.
pub const PS256_TOKEN: &str = "HC1:NCF970OF0/3WKWG.FKH470GKM596C418EOG6P CU600XK1JCSW86F3 QJA482F3-PMN95Y50.FK6ZKZWERILOPCW8FHZA1+9LZAZM81G7CA6QX8DC9*96DL6/W6M/5DA6S46.*8D+9:H99IANR66M6ZS8UTAYG9Z69UPC1JCWY8+EDXVET3E5$CSUE6O9NPCSW5F/DBWENWE4WE9/D5/EU3E+8DX34SEDA9D%N8RPC5$CP44R6AUIAJQE1VE846Y96B466W5.46$962G7XF6PF68JB5WEL$E6$CSWE1$CKWE1%EW34HXO%VDT34ZJC4KCD3DX47B46IL6646H*6KWEKDDC%6-Q6QW66464KCAWE6T9G%6G%67W5JPCT3E5JDLA7$Q6E464W5TG6..DX%DZJC6/DTZ9 QE5$C .CJECLPCG/DXJDIZAITA2IA.HAXZAI3D5 C*KE*PDMPCG/D5 C5IA5N9$PC5$CUZC$$5Y$5FBB630N8I8804MACH7MNLQ4S:+7OKU+%FWM92TIDUD/TVJSFNB1T9JOF3+0N7F4.6TH*QY2PB84CBNLCB34QXOA%0MN8U%QM.+4RZ6F/U 6NOG2066*FARA0A66-3TK14.PJ*4TSSK4NU.GF21U8L1TLMS%ET*0.971:UTBK4 F6%5$CDIY1:ED8B8+ PVRVSZFQDIG:2GAUPMNFFS7$OVF8IL10T4T9B-477:296TR9R9535%TZE58MV82DYPGL0P91B:MSQWNY.5YNNEKGY 0IWMF9VT3UTCBRGR+45%CQQ3B+UDF4HIG6APB$72MHJXLG.HKDG51+QQ759GUHB9 6I EHXKL7GB+$L7XU3%AT$1E:6UAFQ$3-$0B$9Q$J3.L-8TQ$J 2";

pub fn ec_certificate() -> TrustCertificate {
    TrustCertificate::from_base64(EC_KID_B64, EC_CERT_B64).unwrap()
}

pub fn rsa_certificate() -> TrustCertificate {
    TrustCertificate::from_base64(RSA_KID_B64, RSA_CERT_B64).unwrap()
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

const ALPHABET: &[u8; 45] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ $%*+-./:";

pub fn base45_encode(bytes: &[u8]) -> String {
    let mut out = String::new();
    for chunk in bytes.chunks(2) {
        let (mut x, digits) = match *chunk {
            [a, b] => ((u32::from(a) << 8) | u32::from(b), 3),
            [a] => (u32::from(a), 2),
            _ => unreachable!(),
        };
        for _ in 0..digits {
            out.push(ALPHABET[(x % 45) as usize] as char);
            x /= 45;
        }
    }
    out
}

pub fn zlib(data: &[u8]) -> Vec<u8> {
    let mut enc = ZlibEncoder::new(Vec::new(), Compression::default());
    enc.write_all(data).unwrap();
    enc.finish().unwrap()
}

/// `HC1:` token around an arbitrary COSE structure.
pub fn token_from_cose(cose: &[u8]) -> String {
    format!("HC1:{}", base45_encode(&zlib(cose)))
}

/// CBOR claim map with a single test entry.
pub fn test_payload(result: &str) -> Vec<u8> {
    let mut out = Vec::new();
    let mut enc = Encoder::new(&mut out);
    enc.map(4).unwrap();
    enc.u8(1).unwrap().str("DE").unwrap();
    enc.u8(6).unwrap().u64(1622316073).unwrap();
    enc.u8(4).unwrap().u64(1687880000).unwrap();
    enc.i16(-260).unwrap().map(1).unwrap();
    enc.u8(1).unwrap().map(4).unwrap();
    enc.str("ver").unwrap().str("1.3.0").unwrap();
    enc.str("dob").unwrap().str("1964-08-12").unwrap();
    enc.str("nam").unwrap().map(2).unwrap();
    enc.str("fn").unwrap().str("Musterfrau").unwrap();
    enc.str("fnt").unwrap().str("MUSTERFRAU").unwrap();
    enc.str("t").unwrap().array(1).unwrap().map(9).unwrap();
    enc.str("tg").unwrap().str("840539006").unwrap();
    enc.str("tt").unwrap().str("LP6464-4").unwrap();
    enc.str("nm").unwrap().str("Roche LightCycler qPCR").unwrap();
    enc.str("sc").unwrap().str("2021-05-30T10:12:22Z").unwrap();
    enc.str("tr").unwrap().str(result).unwrap();
    enc.str("tc").unwrap().str("Testzentrum Köln Hbf").unwrap();
    enc.str("co").unwrap().str("DE").unwrap();
    enc.str("is").unwrap().str("Robert Koch-Institut").unwrap();
    enc.str("ci").unwrap().str("URN:UVCI:01DE/IBMT102/18Q12HTUJ7NG3ZVDK6TLT0#G").unwrap();
    out
}

pub fn signing_key(seed: u8) -> SigningKey {
    SigningKey::from_slice(&[seed; 32]).unwrap()
}

pub fn spki_certificate(kid: &[u8], sk: &SigningKey) -> TrustCertificate {
    let spki = sk.verifying_key().to_public_key_der().unwrap();
    TrustCertificate::new(KeyId::new(kid), spki.as_bytes().to_vec())
}

/// ES256-signed `HC1:` token for `payload`. `kid` goes into the protected header.
pub fn signed_token(sk: &SigningKey, kid: Option<&[u8]>, payload: &[u8]) -> String {
    let mut protected = Vec::new();
    {
        let mut enc = Encoder::new(&mut protected);
        enc.map(1 + kid.is_some() as u64).unwrap();
        enc.u8(1).unwrap().i8(-7).unwrap();
        if let Some(kid) = kid {
            enc.u8(4).unwrap().bytes(kid).unwrap();
        }
    }

    let mut to_sign = Vec::new();
    {
        let mut enc = Encoder::new(&mut to_sign);
        enc.array(4).unwrap();
        enc.str("Signature1").unwrap().bytes(&protected).unwrap().bytes(&[]).unwrap().bytes(payload).unwrap();
    }
    let signature: p256::ecdsa::Signature = sk.sign(&to_sign);

    let mut cose = Vec::new();
    {
        let mut enc = Encoder::new(&mut cose);
        enc.tag(Tag::new(18)).unwrap().array(4).unwrap();
        enc.bytes(&protected).unwrap().map(0).unwrap();
        enc.bytes(payload).unwrap().bytes(&signature.to_bytes()).unwrap();
    }
    token_from_cose(&cose)
}
