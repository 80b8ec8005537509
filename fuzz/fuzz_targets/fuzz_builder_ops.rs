#![no_main]

use libfuzzer_sys::fuzz_target;

use textbuf::Builder;

// Interprets the input as an operation sequence against `Builder`, mirroring
// every edit onto a `String` ground-truth model and comparing the final text.
//
// Byte layout: repeated `(opcode, operand)` pairs. String operands draw up to
// `operand % 9` further bytes from the stream (lossily decoded to UTF-8);
// numeric operands draw 8 bytes little-endian.
fuzz_target!(|data: &[u8]| {
    let mut input = data.iter().copied();
    let take_str = |n: usize, input: &mut dyn Iterator<Item = u8>| -> String {
        let raw: Vec<u8> = input.take(n).collect();
        String::from_utf8_lossy(&raw).into_owned()
    };
    let take_u64 = |input: &mut dyn Iterator<Item = u8>| -> u64 {
        let mut word = [0u8; 8];
        for slot in &mut word {
            *slot = input.next().unwrap_or(0);
        }
        u64::from_le_bytes(word)
    };

    let mut model = String::new();
    let mut steps = 0usize;
    let text = Builder::run(|mut b| {
        loop {
            let Some(opcode) = input.next() else { break };
            let Some(operand) = input.next() else { break };
            steps += 1;
            if steps > 512 {
                break;
            }
            match opcode % 10 {
                0 => {
                    let s = take_str(operand as usize % 9, &mut input);
                    model.push_str(&s);
                    b = b.append_str(&s);
                }
                1 => {
                    let s = take_str(operand as usize % 9, &mut input);
                    model.insert_str(0, &s);
                    b = b.prepend_str(&s);
                }
                2 => {
                    let c = char::from_u32(operand as u32 * 0x101).unwrap_or('�');
                    model.push(c);
                    b = b.append_char(c);
                }
                3 => {
                    let c = char::from_u32(operand as u32 * 0x101).unwrap_or('�');
                    model.insert(0, c);
                    b = b.prepend_char(c);
                }
                4 => {
                    let v = take_u64(&mut input);
                    model.push_str(&v.to_string());
                    b = b.append_dec(v);
                }
                5 => {
                    let v = take_u64(&mut input) as i64;
                    model.insert_str(0, &v.to_string());
                    b = b.prepend_dec(v);
                }
                6 => {
                    let v = take_u64(&mut input);
                    model.push_str(&format!("{v:x}"));
                    b = b.append_hex(v);
                }
                7 => {
                    let n = operand as usize;
                    let idx = model
                        .char_indices()
                        .nth(n)
                        .map_or(model.len(), |(i, _)| i);
                    model.truncate(idx);
                    b = b.take_chars(n);
                }
                8 => {
                    let n = operand as usize;
                    let idx = model
                        .char_indices()
                        .nth(n)
                        .map_or(model.len(), |(i, _)| i);
                    model.drain(..idx);
                    b = b.drop_chars(n);
                }
                _ => {
                    model.clear();
                    b = b.erase();
                }
            }
            assert_eq!(b.size_bytes(), model.len());
        }
        b
    });

    assert_eq!(text.as_str(), model.as_str());
});
