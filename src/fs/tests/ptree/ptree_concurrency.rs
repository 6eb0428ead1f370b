use super::*;
use crate::vfs::{InodeType, OpenFlags};
use crate::{kassert, test_case};
use std::thread;

test_case!(test_concurrent_readers_and_writer, {
    let fs = PtreeFs::new(MountOptions::new().with_file_capacity(64), Credential::root()).unwrap();
    let file = fs.root().create_file("f", b"").unwrap();

    // 写者交替写入全 'a' 和全 'b' 的内容，长度不同
    let writer = {
        let file = file.clone();
        thread::spawn(move || {
            for i in 0..2000 {
                let (byte, len) = if i % 2 == 0 { (b'a', 10) } else { (b'b', 40) };
                let data = alloc::vec![byte; len];
                file.write_at(0, &data).unwrap();
            }
        })
    };

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let file = file.clone();
            thread::spawn(move || {
                for _ in 0..2000 {
                    let mut buf = [0u8; 64];
                    let n = file.read_at(0, &mut buf).unwrap();
                    // 读到的必须是一次完整的写入
                    kassert!(n == 0 || n == 10 || n == 40);
                    if n > 0 {
                        let first = buf[0];
                        kassert!(buf[..n].iter().all(|&b| b == first));
                        kassert!((first == b'a' && n == 10) || (first == b'b' && n == 40));
                    }
                }
            })
        })
        .collect();

    writer.join().unwrap();
    for r in readers {
        r.join().unwrap();
    }
    kassert!(file.metadata().unwrap().size == 40);
});

test_case!(test_concurrent_appends_are_not_lost, {
    let fs = PtreeFs::new(MountOptions::default(), Credential::root()).unwrap();
    fs.root().create_file("log", b"").unwrap();

    let handles: Vec<_> = [b'x', b'y', b'z', b'w']
        .into_iter()
        .map(|byte| {
            let file = fs
                .open("/log", OpenFlags::O_WRONLY | OpenFlags::O_APPEND, &Credential::root())
                .unwrap();
            thread::spawn(move || {
                for _ in 0..200 {
                    kassert!(file.write(&[byte]).unwrap() == 1);
                }
            })
        })
        .collect();

    for h in handles {
        h.join().unwrap();
    }

    let content = read_to_string(&fs.lookup("/log").unwrap());
    kassert!(content.len() == 800);
    for byte in ['x', 'y', 'z', 'w'] {
        kassert!(content.chars().filter(|&c| c == byte).count() == 200);
    }
});

test_case!(test_concurrent_lookup_after_build, {
    let fs = mount_sample(MountOptions::default());

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let fs = fs.clone();
            thread::spawn(move || {
                for _ in 0..200 {
                    let node = fs.lookup("/sshd_50/bash_51/proc_info.txt").unwrap();
                    kassert!(node.metadata().unwrap().inode_type == InodeType::File);
                    kassert!(read_to_string(&node).contains("tty name: pts0"));
                }
            })
        })
        .collect();

    for h in handles {
        h.join().unwrap();
    }
});

test_case!(test_concurrent_create_same_name, {
    let fs = create_test_fs();
    let root = fs.root();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let root = root.clone();
            thread::spawn(move || root.create_dir("race").is_ok())
        })
        .collect();

    let created = handles
        .into_iter()
        .map(|h| h.join().unwrap())
        .filter(|&ok| ok)
        .count();
    kassert!(created == 1);
    kassert!(fs.node_count() == 2);
});
