use metricsbike_core::fit::decode_power;

// Minimal FIT-koding for tester: 14-byte header, definisjoner, data, CRC.

const CRC_TABLE: [u16; 16] = [
    0x0000, 0xCC01, 0xD801, 0x1400, 0xF001, 0x3C00, 0x2800, 0xE401, 0xA001, 0x6C00, 0x7800, 0xB401,
    0x5000, 0x9C01, 0x8801, 0x4400,
];

fn fit_crc(bytes: &[u8]) -> u16 {
    bytes.iter().fold(0u16, |crc, &b| {
        let tmp = CRC_TABLE[(crc & 0xF) as usize];
        let crc = ((crc >> 4) & 0x0FFF) ^ tmp ^ CRC_TABLE[(b & 0xF) as usize];
        let tmp = CRC_TABLE[(crc & 0xF) as usize];
        ((crc >> 4) & 0x0FFF) ^ tmp ^ CRC_TABLE[((b >> 4) & 0xF) as usize]
    })
}

const RECORD: u16 = 20;
const POWER: u8 = 7;
const HEART_RATE: u8 = 3;
const UINT8: u8 = 0x02;
const UINT16: u8 = 0x84;

// lokal 0: record med power, lokal 1: record med kun puls
const LOCAL_POWER: u8 = 0;
const LOCAL_HR: u8 = 1;

enum Sample {
    Power(u16),
    HeartRateOnly(u8),
}

fn definition(local: u8, global: u16, fields: &[(u8, u8, u8)]) -> Vec<u8> {
    let mut out = vec![0x40 | local, 0, 0];
    out.extend_from_slice(&global.to_le_bytes());
    out.push(fields.len() as u8);
    for &(num, size, base) in fields {
        out.extend_from_slice(&[num, size, base]);
    }
    out
}

fn fit_file(samples: &[Sample]) -> Vec<u8> {
    let mut data = definition(LOCAL_POWER, RECORD, &[(POWER, 2, UINT16)]);
    data.extend(definition(LOCAL_HR, RECORD, &[(HEART_RATE, 1, UINT8)]));
    for s in samples {
        match s {
            Sample::Power(w) => {
                data.push(LOCAL_POWER);
                data.extend_from_slice(&w.to_le_bytes());
            }
            Sample::HeartRateOnly(hr) => {
                data.push(LOCAL_HR);
                data.push(*hr);
            }
        }
    }

    let mut out = vec![14u8, 0x20];
    out.extend_from_slice(&2140u16.to_le_bytes());
    out.extend_from_slice(&(data.len() as u32).to_le_bytes());
    out.extend_from_slice(b".FIT");
    let header_crc = fit_crc(&out);
    out.extend_from_slice(&header_crc.to_le_bytes());

    out.extend(data);
    let file_crc = fit_crc(&out);
    out.extend_from_slice(&file_crc.to_le_bytes());
    out
}

#[test]
fn test_one_sample_per_record_in_file_order() {
    let bytes = fit_file(&[Sample::Power(180), Sample::Power(250), Sample::Power(0), Sample::Power(310)]);
    let s = decode_power(&bytes).unwrap();
    assert_eq!(s, vec![180.0, 250.0, 0.0, 310.0]);
}

#[test]
fn test_record_without_power_is_zero() {
    let bytes = fit_file(&[
        Sample::Power(200),
        Sample::HeartRateOnly(140),
        Sample::Power(220),
    ]);
    assert_eq!(decode_power(&bytes).unwrap(), vec![200.0, 0.0, 220.0]);
}

#[test]
fn test_no_power_anywhere_gives_empty_series() {
    let bytes = fit_file(&[Sample::HeartRateOnly(120), Sample::HeartRateOnly(125)]);
    assert!(decode_power(&bytes).unwrap().is_empty());
}

#[test]
fn test_corrupt_crc_is_an_error() {
    let mut bytes = fit_file(&[Sample::Power(200)]);
    let last = bytes.len() - 1;
    bytes[last] ^= 0xFF;
    assert!(decode_power(&bytes).is_err());
}
