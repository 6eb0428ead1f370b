use super::*;
use crate::fs::mount_task_tree;
use crate::fs::ptree::ProcInfo;
use crate::kernel::task::TASK_MANAGER;
use crate::vfs::{FileSystem, InodeType};
use crate::{kassert, test_case};

test_case!(test_init_sshd_bash_scenario, {
    let fs = mount_sample(MountOptions::default());

    let init = read_to_string(&fs.lookup("/proc_info.txt").unwrap());
    kassert!(init.contains("process name: init"));
    kassert!(init.contains("pid: 1"));

    let sshd = read_to_string(&fs.lookup("/sshd_50/proc_info.txt").unwrap());
    kassert!(sshd.contains("tty name: NA"));

    let bash = read_to_string(&fs.lookup("/sshd_50/bash_51/proc_info.txt").unwrap());
    kassert!(bash.contains("tty name: pts0"));
    kassert!(ProcInfo::parse(&bash) == Some(ProcInfo::new("bash", 51, Some("pts0"))));

    let stats = fs.build_stats().unwrap();
    kassert!(stats.processes == 3);
    kassert!(stats.max_depth == 2);
});

test_case!(test_process_directory_listing, {
    let tm = create_task_tree(
        "init",
        &[
            (1, 50, "sshd", None),
            (50, 51, "bash", Some("pts0")),
            (50, 52, "bash", Some("pts1")),
            (50, 60, "scp", None),
        ],
    );
    let fs = PtreeFs::mount(tm.root().unwrap(), MountOptions::default(), Credential::root()).unwrap();

    let entries = fs.lookup("/sshd_50").unwrap().readdir().unwrap();
    let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
    kassert!(names == alloc::vec![".", "..", "bash_51", "bash_52", "proc_info.txt", "scp_60"]);

    let info = entries.iter().find(|e| e.name == "proc_info.txt").unwrap();
    kassert!(info.inode_type == InodeType::File);
    let dirs = entries
        .iter()
        .filter(|e| e.inode_type == InodeType::Directory)
        .count();
    // "." ".." 加三个子进程
    kassert!(dirs == 5);
});

test_case!(test_snapshot_is_static, {
    let mut tm = create_sample_hierarchy();
    let fs = PtreeFs::mount(tm.root().unwrap(), MountOptions::default(), Credential::root()).unwrap();

    tm.spawn_with_pid(1, 70, "cron").unwrap();
    tm.exit(50).unwrap();

    // 挂载后的变化不会反映到树里
    kassert!(fs.lookup("/cron_70").is_err());
    kassert!(fs.lookup("/sshd_50/bash_51/proc_info.txt").is_ok());

    // 重新挂载得到新的快照
    let fresh = PtreeFs::mount(tm.root().unwrap(), MountOptions::default(), Credential::root()).unwrap();
    kassert!(fresh.lookup("/cron_70").is_ok());
    kassert!(fresh.lookup("/bash_51").is_ok());
    kassert!(fresh.lookup("/sshd_50").is_err());
});

test_case!(test_every_process_visited_once, {
    let mut tm = create_task_tree("init", &[]);
    for pid in 2..40u32 {
        let parent = if pid < 8 { 1 } else { pid / 4 };
        tm.spawn_with_pid(parent, pid, "w").unwrap();
    }
    let fs = PtreeFs::mount(tm.root().unwrap(), MountOptions::default(), Credential::root()).unwrap();
    let stats = fs.build_stats().unwrap();

    kassert!(stats.processes == tm.task_count());
    kassert!(stats.files == tm.task_count());
    kassert!(fs.node_count() == 2 * tm.task_count());
    kassert!(stats.directories == tm.task_count());

    // 每个 pid 都能按父子关系找到自己的目录
    kassert!(fs.lookup("/w_2/w_8/w_32/proc_info.txt").is_ok());
    kassert!(fs.lookup("/w_7/w_28").is_ok());
});

test_case!(test_mount_global_task_manager, {
    {
        let mut tm = TASK_MANAGER.lock();
        if tm.root().is_none() {
            tm.create_init("init").unwrap();
        }
        let pid = tm.spawn(1, "kthreadd").unwrap().lock().pid;
        tm.set_tty(pid, Some(Tty::new("console"))).unwrap();
    }

    let fs = mount_task_tree(MountOptions::default(), Credential::root()).unwrap();
    kassert!(fs.fs_type() == "ptreefs");
    kassert!(fs.root().find_child("proc_info.txt").is_ok());
    kassert!(fs
        .root()
        .child_names()
        .iter()
        .any(|name| name.starts_with("kthreadd_")));
});
