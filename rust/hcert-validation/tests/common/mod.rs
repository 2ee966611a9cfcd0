// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

#![allow(dead_code)]

use base64::{engine::general_purpose::STANDARD, Engine as _};
use hcert_abstractions::{KeyId, RawCoseEnvelope, TrustCertificate};
use hcert_common::{base45, decode_value, inflate, parse_cose_envelope};
use minicbor::Encoder;
use p256::ecdsa::signature::Signer;
use p256::ecdsa::SigningKey;
use p256::pkcs8::EncodePublicKey;

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

pub fn envelope_of(token: &str) -> RawCoseEnvelope {
    let compressed = base45::decode(token.strip_prefix("HC1:").unwrap()).unwrap();
    let cose = inflate::decompress(&compressed, inflate::DEFAULT_MAX_DECOMPRESSED_LEN).unwrap();
    parse_cose_envelope(&decode_value(&cose).unwrap()).unwrap()
}

pub fn signing_key(seed: u8) -> SigningKey {
    SigningKey::from_slice(&[seed; 32]).unwrap()
}

/// Trust certificate holding the bare SPKI of `sk`.
pub fn spki_certificate(kid: &[u8], sk: &SigningKey) -> TrustCertificate {
    let spki = sk.verifying_key().to_public_key_der().unwrap();
    TrustCertificate::new(KeyId::new(kid), spki.as_bytes().to_vec())
}

pub fn protected_header(alg: i64, kid: &[u8]) -> Vec<u8> {
    let mut out = Vec::new();
    let mut enc = Encoder::new(&mut out);
    enc.map(2).unwrap();
    enc.i64(1).unwrap().i64(alg).unwrap();
    enc.i64(4).unwrap().bytes(kid).unwrap();
    out
}

pub fn sig_structure(protected: &[u8], payload: &[u8]) -> Vec<u8> {
    let mut out = Vec::new();
    let mut enc = Encoder::new(&mut out);
    enc.array(4).unwrap();
    enc.str("Signature1").unwrap();
    enc.bytes(protected).unwrap();
    enc.bytes(&[]).unwrap();
    enc.bytes(payload).unwrap();
    out
}

/// Envelope signed with ES256 by `sk`, kid in the protected header.
pub fn es256_envelope(sk: &SigningKey, kid: &[u8], payload: &[u8]) -> RawCoseEnvelope {
    let protected = protected_header(-7, kid);
    let sig: p256::ecdsa::Signature = sk.sign(&sig_structure(&protected, payload));
    RawCoseEnvelope {
        protected,
        payload: payload.to_vec(),
        signature: sig.to_bytes().to_vec(),
        ..Default::default()
    }
}

pub fn b64(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}
