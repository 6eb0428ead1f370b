use super::*;
use crate::vfs::{File, FsError, OpenFlags, SeekWhence};
use crate::{kassert, test_case};

fn user() -> Credential {
    Credential::user(1000, 1000)
}

test_case!(test_open_read_session, {
    let fs = mount_sample(MountOptions::default());
    let file = fs
        .open("/sshd_50/proc_info.txt", OpenFlags::O_RDONLY, &user())
        .unwrap();

    let mut buf = [0u8; 13];
    kassert!(file.read(&mut buf).unwrap() == 13);
    kassert!(&buf == b"process name:");
    kassert!(file.offset() == 13);

    let mut rest = [0u8; 64];
    let n = file.read(&mut rest).unwrap();
    kassert!(&rest[..n] == b" sshd\npid: 50\ntty name: NA\n");
    kassert!(file.read(&mut rest).unwrap() == 0);
});

test_case!(test_open_write_requires_permission, {
    let fs = mount_sample(MountOptions::default());

    let err = fs
        .open("/proc_info.txt", OpenFlags::O_WRONLY, &user())
        .err();
    kassert!(err == Some(FsError::PermissionDenied));

    let err = fs
        .open("/proc_info.txt", OpenFlags::O_RDONLY | OpenFlags::O_TRUNC, &user())
        .err();
    kassert!(err == Some(FsError::PermissionDenied));

    kassert!(fs
        .open("/proc_info.txt", OpenFlags::O_RDWR, &Credential::root())
        .is_ok());
});

test_case!(test_owner_write_bit, {
    // 0444 对属主同样只读
    let fs = PtreeFs::new(MountOptions::default(), user()).unwrap();
    fs.root().create_file("f", b"x").unwrap();
    kassert!(fs.open("/f", OpenFlags::O_WRONLY, &user()).err() == Some(FsError::PermissionDenied));
});

test_case!(test_write_session, {
    let fs = mount_sample(MountOptions::default());
    let file = fs
        .open("/proc_info.txt", OpenFlags::O_RDWR, &Credential::root())
        .unwrap();

    kassert!(file.write(b"hi").unwrap() == 2);
    kassert!(file.offset() == 2);
    kassert!(file.metadata().unwrap().size == 2);

    kassert!(file.lseek(0, SeekWhence::Set).unwrap() == 0);
    let mut buf = [0u8; 8];
    kassert!(file.read(&mut buf).unwrap() == 2);
    kassert!(&buf[..2] == b"hi");
});

test_case!(test_open_trunc, {
    let fs = mount_sample(MountOptions::default());
    let file = fs
        .open(
            "/sshd_50/bash_51/proc_info.txt",
            OpenFlags::O_WRONLY | OpenFlags::O_TRUNC,
            &Credential::root(),
        )
        .unwrap();

    kassert!(file.metadata().unwrap().size == 0);
    kassert!(!file.readable());
    let mut buf = [0u8; 1];
    kassert!(file.read(&mut buf).err() == Some(FsError::PermissionDenied));
});

test_case!(test_append_and_seek, {
    let fs = create_test_fs();
    fs.root().create_file("log", b"abc").unwrap();
    let file = fs
        .open("log", OpenFlags::O_WRONLY | OpenFlags::O_APPEND, &Credential::root())
        .unwrap();

    kassert!(file.write(b"de").unwrap() == 2);
    kassert!(file.offset() == 5);
    kassert!(read_to_string(&fs.lookup("/log").unwrap()) == "abcde");

    kassert!(file.lseek(-1, SeekWhence::End).unwrap() == 4);
    kassert!(file.lseek(-1, SeekWhence::Cur).unwrap() == 3);
    kassert!(file.lseek(-10, SeekWhence::Cur).err() == Some(FsError::InvalidArgument));
    kassert!(file.offset() == 3);
});

test_case!(test_write_through_session_truncates, {
    let fs = PtreeFs::new(MountOptions::new().with_file_capacity(8), Credential::root()).unwrap();
    fs.root().create_file("f", b"").unwrap();
    let file = fs.open("/f", OpenFlags::O_WRONLY, &Credential::root()).unwrap();

    kassert!(file.write(b"0123456789").unwrap() == 7);
    kassert!(file.write(b"more").unwrap() == 0);
    kassert!(file.metadata().unwrap().size == 7);
});

test_case!(test_open_directory, {
    let fs = mount_sample(MountOptions::default());

    let dir = fs.open("/sshd_50", OpenFlags::O_RDONLY, &user()).unwrap();
    let mut buf = [0u8; 4];
    kassert!(dir.read(&mut buf).err() == Some(FsError::IsDirectory));

    let err = fs.open("/sshd_50", OpenFlags::O_RDWR, &Credential::root()).err();
    kassert!(err == Some(FsError::IsDirectory));

    let err = fs
        .open("/proc_info.txt", OpenFlags::O_RDONLY | OpenFlags::O_DIRECTORY, &user())
        .err();
    kassert!(err == Some(FsError::NotDirectory));
    kassert!(fs
        .open("/sshd_50", OpenFlags::O_RDONLY | OpenFlags::O_DIRECTORY, &user())
        .is_ok());
});

test_case!(test_lookup_paths, {
    let fs = mount_sample(MountOptions::default());

    kassert!(fs.lookup("/").unwrap().inode_no() == fs.root().inode_no());
    kassert!(fs.lookup("").unwrap().inode_no() == fs.root().inode_no());
    kassert!(fs.lookup("sshd_50/bash_51").is_ok());
    kassert!(fs.lookup("/sshd_50/./bash_51/../bash_51/proc_info.txt").is_ok());
    kassert!(fs.lookup("/../../sshd_50").is_ok());
    kassert!(fs.lookup("//sshd_50///").is_ok());

    kassert!(fs.lookup("/nope").unwrap_err() == FsError::NotFound);
    kassert!(fs.lookup("/proc_info.txt/x").unwrap_err() == FsError::NotDirectory);
    kassert!(fs.lookup("/proc_info.txt/..").unwrap_err() == FsError::NotDirectory);
});
