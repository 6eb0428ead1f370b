use crate::config::OversizePolicy;
use crate::fs::ptree::ContentBuffer;
use crate::vfs::FsError;
use crate::{kassert, test_case};

test_case!(test_buffer_empty, {
    let buf = ContentBuffer::with_capacity(8).unwrap();
    kassert!(buf.is_empty());
    kassert!(buf.len() == 0);
    kassert!(buf.capacity() == 8);
    kassert!(buf.as_bytes().is_empty());

    // 容量 0 按 1 处理，只能容纳结尾的 NUL
    let tiny = ContentBuffer::with_capacity(0).unwrap();
    kassert!(tiny.capacity() == 1);
});

test_case!(test_buffer_read_bounds, {
    let buf = ContentBuffer::with_content(16, b"0123456789", OversizePolicy::Truncate).unwrap();
    let mut out = [0u8; 4];

    kassert!(buf.read(0, &mut out) == 4);
    kassert!(&out == b"0123");
    kassert!(buf.read(8, &mut out) == 2);
    kassert!(&out[..2] == b"89");
    kassert!(buf.read(10, &mut out) == 0);
    kassert!(buf.read(100, &mut out) == 0);
});

test_case!(test_buffer_write_truncates_at_capacity, {
    let mut buf = ContentBuffer::with_capacity(8).unwrap();

    kassert!(buf.write(0, b"abcdefghijk") == 7);
    kassert!(buf.len() == 7);
    kassert!(buf.as_bytes() == b"abcdefg");

    kassert!(buf.write(5, b"XYZ") == 2);
    kassert!(buf.as_bytes() == b"abcdeXY");
});

test_case!(test_buffer_write_sets_length, {
    let mut buf = ContentBuffer::with_content(16, b"0123456789", OversizePolicy::Truncate).unwrap();

    // 逻辑长度变为 offset + n，即使比原来短
    kassert!(buf.write(0, b"ab") == 2);
    kassert!(buf.as_bytes() == b"ab");
});

test_case!(test_buffer_write_zero_fills_gap, {
    let mut buf = ContentBuffer::with_content(16, b"0123456789", OversizePolicy::Truncate).unwrap();
    buf.write(0, b"ab");

    kassert!(buf.write(5, b"Z") == 1);
    kassert!(buf.as_bytes() == b"ab\0\0\0Z");
});

test_case!(test_buffer_append, {
    let mut buf = ContentBuffer::with_content(8, b"abc", OversizePolicy::Truncate).unwrap();

    kassert!(buf.append(b"de") == 2);
    kassert!(buf.as_bytes() == b"abcde");
    kassert!(buf.append(b"fghij") == 2);
    kassert!(buf.as_bytes() == b"abcdefg");
    kassert!(buf.append(b"x") == 0);
    kassert!(buf.len() == 7);
});

test_case!(test_buffer_write_past_end, {
    let mut buf = ContentBuffer::with_content(8, b"abc", OversizePolicy::Truncate).unwrap();

    // offset 超过 C - 1：不修改
    kassert!(buf.write(8, b"x") == 0);
    kassert!(buf.write(100, b"x") == 0);
    kassert!(buf.as_bytes() == b"abc");

    // offset 恰好为 C - 1：写入 0 字节，长度扩展到 C - 1
    kassert!(buf.write(7, b"x") == 0);
    kassert!(buf.len() == 7);
    kassert!(buf.as_bytes() == b"abc\0\0\0\0");
});

test_case!(test_buffer_truncate, {
    let mut buf = ContentBuffer::with_content(8, b"abcdef", OversizePolicy::Truncate).unwrap();

    buf.truncate(2);
    kassert!(buf.as_bytes() == b"ab");

    buf.truncate(4);
    kassert!(buf.as_bytes() == b"ab\0\0");

    buf.truncate(100);
    kassert!(buf.len() == 7);

    buf.truncate(0);
    kassert!(buf.is_empty());
});

test_case!(test_buffer_oversize_content, {
    let content = [b'q'; 20];

    let buf = ContentBuffer::with_content(8, &content, OversizePolicy::Truncate).unwrap();
    kassert!(buf.len() == 7);

    let err = ContentBuffer::with_content(8, &content, OversizePolicy::Reject).unwrap_err();
    kassert!(err == FsError::FileTooLarge);
});
